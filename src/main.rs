fn main() {
    laravels::app::cli::run();
}
