use computor::polynomial::equation_api::run;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (output, code) = run(&args, Some("warn".to_string()));
    println!("{}", output);
    if code != 0 {
        process::exit(code);
    }
}
