use ferrodiode::app::run;

fn main() -> color_eyre::Result<()> {
    run::<f64>()
}
