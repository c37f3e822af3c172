// SPDX-License-Identifier: MIT OR Apache-2.0
use std::panic::Location;

/**
Where a log statement was written.

Built by the logging macros, or from [Location::caller] when a statement is constructed directly
from a `#[track_caller]` function.  Only the macros know the enclosing function.

The macros store the function as the raw `type_name` of a marker nested in it; the marker and
closure suffixes are trimmed by [LogRecord::log_prefix](crate::LogRecord::log_prefix), so
statements below the threshold never pay for it.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    pub function: Option<&'static str>,
}

impl CallSite {
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
            function: None,
        }
    }

    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            line,
            column,
            function: None,
        }
    }

    /// Sets the enclosing function: a plain path, or a `type_name` as produced by the macros.
    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }
}

/**
Returns the part of `path` after its last path separator.

Both `/` and `\` count as separators, since `file!()` uses the host's.

```rust
assert_eq!(scopelog::trim_file_name("/x/y/z.ext"), "z.ext");
assert_eq!(scopelog::trim_file_name("z.ext"), "z.ext");
```
*/
pub fn trim_file_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/**
Turns the type name of an item nested in a function into that function's path.

`raw` is `type_name` of a marker fn named `__f` declared inside the function.
*/
#[doc(hidden)]
pub fn enclosing_function(raw: &str) -> &str {
    let mut name = raw.strip_suffix("::__f").unwrap_or(raw);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// Expands to the untrimmed `type_name` of a marker fn declared in the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! function_type_name {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        __type_name_of(__f)
    }};
}

/**
Expands to the path of the enclosing function, as a `&'static str`.

```rust
fn handler() -> &'static str {
    scopelog::function_path!()
}
assert!(handler().ends_with("handler"));
```
*/
#[macro_export]
macro_rules! function_path {
    () => {
        $crate::hidden::enclosing_function($crate::function_type_name!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_to_last_separator() {
        assert_eq!(trim_file_name("/x/y/z.ext"), "z.ext");
        assert_eq!(trim_file_name("src\\bin\\main.rs"), "main.rs");
        assert_eq!(trim_file_name("z.ext"), "z.ext");
        assert_eq!(trim_file_name("dir/"), "");
    }

    #[test]
    fn caller_is_this_file() {
        let site = CallSite::caller();
        assert!(site.file.ends_with("location.rs"));
        assert_eq!(site.function, None);
    }

    #[test]
    fn function_path_names_the_enclosing_function() {
        let path = crate::function_path!();
        assert!(
            path.ends_with("location::tests::function_path_names_the_enclosing_function"),
            "{path}"
        );
    }

    #[test]
    fn function_path_strips_closures() {
        let path = (|| crate::function_path!())();
        assert!(path.ends_with("function_path_strips_closures"), "{path}");
    }

    #[test]
    fn call_site_defers_trimming() {
        let site = crate::call_site!();
        let raw = site.function.expect("macros record the function");
        assert!(raw.ends_with("call_site_defers_trimming::__f"), "{raw}");
        assert!(enclosing_function(raw).ends_with("tests::call_site_defers_trimming"));
    }

    #[test]
    fn enclosing_function_leaves_unknown_names_alone() {
        assert_eq!(enclosing_function("plain"), "plain");
        assert_eq!(enclosing_function("a::b::__f"), "a::b");
    }
}
