use undebugify::cli;

fn main() {
    cli::run();
}
