fn main() {
    datasyncer::app::cli::run_mobile_to_desktop();
}
