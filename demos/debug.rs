use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let line = std::env::args().nth(1).unwrap_or_else(|| {
        r"ICA3D17F2>APRS,qAS,dl4mea:/074849h4821.61N\01224.49E^322/103/A=003054".to_owned()
    });

    let result = aprs_decoder::parse_text(&line);

    println!("{:#?}", result);
}
