mod run;

use anyhow::Result;

fn main() -> Result<()> {
    cardwise::logging::init();
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => {
            run::print_usage();
            Ok(())
        }
        2.. => run::as_cli(&args),
        _ => {
            eprintln!("Usage: cardwise <command>");
            Ok(())
        }
    }
}
