// src/cli.rs
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::config::options::BuildOptions;
use crate::progress::Progress;
use crate::schema;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut opts = BuildOptions::default();
    parse_cli(&mut opts)?;

    if opts.list_services {
        for (slug, name, category) in crate::runner::list_services(&opts)? {
            println!("{slug},{name},{category}");
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress::default();
    let summary = crate::runner::run(&opts, Some(&mut progress))?;
    println!(
        "Wrote {} pages and {} redirect rules to {}",
        summary.pages_written.len(),
        summary.redirect_rules,
        opts.out_dir.display()
    );
    Ok(())
}

fn parse_cli(opts: &mut BuildOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--data" => {
                opts.data_dir = PathBuf::from(args.next().ok_or("Missing value for --data")?);
            }
            "-o" | "--out" => {
                opts.out_dir = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--base-url" => {
                let v = args.next().ok_or("Missing value for --base-url")?;
                opts.set_base_url(&v);
            }
            "--category" => {
                let v = args.next().ok_or("Missing value for --category")?.to_ascii_lowercase();
                if !schema::CATEGORIES.iter().any(|(key, _)| *key == v) {
                    return Err(format!("Unknown category: {}", v).into());
                }
                opts.category = Some(v);
            }
            "--list-services" => opts.list_services = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

/* ---------------- Console progress ---------------- */

#[derive(Default)]
struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Planning {total} pages");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn page_done(&mut self, path: &Path) {
        self.done += 1;
        println!("[{}/{}] {}", self.done, self.total, path.display());
    }
}
