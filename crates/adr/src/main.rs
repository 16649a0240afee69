use owo_colors::OwoColorize as _;

fn main() {
  if let Err(err) = adr::run() {
    anstream::eprintln!("{}", err.to_string().red());
    if let Some(usage) = err.downcast_ref::<adr::UsageError>() {
      anstream::eprintln!("{}", usage.usage());
    }
    std::process::exit(1);
  }
}
