fn main() {
    if let Err(err) = label_declutter::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
