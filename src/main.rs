fn main() {
    if let Err(error) = session_analyzer::run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
