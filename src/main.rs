fn main() {
    if let Err(err) = stacklog::run() {
        stacklog::fatal!("{}", err);
    }
}
