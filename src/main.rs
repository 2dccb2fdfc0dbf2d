fn main() {
    bless::cli::run();
}
