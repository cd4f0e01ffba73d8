use clap::Parser;
use rustknx_core::dpt::date_time::DPT_DATE_TIME;
use rustknx_core::types::DateTime;
use rustknx_tools::{parse_hex, to_hex};

#[derive(Parser, Debug)]
#[command(name = "knx-dtdecode", about = "Decode a DPT 19.001 date/time payload")]
struct Args {
    /// Nine payload octets in hex, e.g. "00 7C 02 1D 98 00 00 00 00".
    payload: String,
    /// Print the decoded record as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let bytes = parse_hex(&args.payload)?;
    log::debug!("DPT {DPT_DATE_TIME} payload: {}", to_hex(&bytes));

    let dt = match DateTime::from_bytes(&bytes) {
        Ok(dt) => dt,
        Err(e) => {
            eprintln!("decode failed: {e}");
            std::process::exit(1);
        }
    };
    log::debug!("decoded fields: {dt:?}");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dt)?);
    } else {
        println!("{dt}");
        if let Some(naive) = dt.to_naive_date_time() {
            log::info!("calendar value: {naive}");
        }
    }
    Ok(())
}
