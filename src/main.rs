use modplan::app::cli;

fn main() {
    cli::run();
}
