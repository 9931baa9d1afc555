//! Entry point for the `prodash` binary.

fn main() {
    std::process::exit(prodash_cli::run());
}
