fn main() {
    datasyncer::app::cli::run_desktop_to_mobile();
}
