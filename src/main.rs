use adr::core::output;

fn main() {
    if let Err(e) = adr::run() {
        output::failure(&e.to_string());
        std::process::exit(1);
    }
}
