// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Writes the given [`std::fmt::Display`] items to a `&mut` [`std::io::Write`] and
/// flushes it, propagating any [`std::io::Error`].
///
/// ```rust
/// use r3bl_line_editor::write_and_flush;
///
/// fn draw(out: &mut impl std::io::Write) -> std::io::Result<()> {
///     write_and_flush!(out, "> ", "hello");
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! write_and_flush {
    ($out:expr, $($item:expr),+ $(,)?) => {{
        $(
            ::std::io::Write::write_fmt(&mut *$out, ::std::format_args!("{}", $item))?;
        )+
        ::std::io::Write::flush(&mut *$out)?;
    }};
}
