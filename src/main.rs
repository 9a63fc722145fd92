use std::io;

use keycase::cli::{parse_args, run};
use keycase::config::{init_dotenv, CONFIG};

fn main() {
    // Cargar .env si existe para obtener los defaults de KEYCASE_*
    init_dotenv();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args)
        .and_then(|command| run(command, &CONFIG, io::stdin().lock(), io::stdout().lock()));
    if let Err(e) = result {
        eprintln!("[keycase] {e}");
        std::process::exit(e.exit_code());
    }
}
