/// Token styling helpers.
///
/// The `t` module stands for "tokens". Use these helpers to style
/// specific values inside info messages consistently across the CLI.
pub mod t {
  use std::fmt::Display;

  use owo_colors::OwoColorize as _;

  pub fn path(p: impl Display) -> String {
    format!("{}", p.to_string().cyan())
  }

  pub fn ok(s: impl Display) -> String {
    format!("{}", s.to_string().green())
  }

  pub fn err(s: impl Display) -> String {
    format!("{}", s.to_string().red())
  }

  pub fn err_underline(s: impl Display) -> String {
    format!("{}", s.to_string().red().underline())
  }
}

// These macros enforce the agreed style: info = neutral, success = full-line tint.
// Use `t::*` helpers to highlight tokens in info messages only.
// Errors are not logged here; they bubble up to `main`.

pub(crate) fn emit(text: &str) {
  anstream::println!("{}", text);
}

#[macro_export]
macro_rules! log_info {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(&format!($fmt $(, $args )*));
  }};
}

#[macro_export]
macro_rules! log_success {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(&$crate::utils::log::t::ok(format!($fmt $(, $args )*)));
  }};
}
