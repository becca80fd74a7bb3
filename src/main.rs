fn main() {
    if let Err(e) = coulomb_sim::app::run() {
        eprintln!("coulomb_sim: {e}");
        std::process::exit(1);
    }
}
