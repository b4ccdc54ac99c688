fn main() {
    if let Err(e) = masc_drv::main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
