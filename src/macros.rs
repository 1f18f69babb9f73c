// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand.

    // No args → empty String
    () => {
        ::std::string::String::new()
    };
    // One expression: literal, const or variable
    ($e:expr) => {
        ::std::string::String::from($e)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate &str pieces into one String
    ($head:expr $(, $tail:expr)+ $(,)?) => {{
        let mut buf = ::std::string::String::from($head);
        $(
            buf.push_str($tail);
        )+
        buf
    }};
}
