fn main() {
    if let Err(err) = csv_pgschema::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
