fn main() {
    if let Err(err) = sentimd::run() {
        eprintln!("{}", sentimd::format_error(&err));
        std::process::exit(1);
    }
}
