use clap::Parser;
use rustknx_core::types::DateTime;
use rustknx_tools::to_hex;

#[derive(Parser, Debug)]
#[command(name = "knx-dtencode", about = "Encode a DPT 19.001 date/time payload")]
struct Args {
    /// Use the local wall-clock time instead of the date/time arguments.
    #[arg(long)]
    now: bool,
    #[arg(long, default_value_t = 2000)]
    year: u16,
    #[arg(long, default_value_t = 1)]
    month: u8,
    #[arg(long, default_value_t = 1)]
    day: u8,
    /// 0 = any day, 1 = Monday ..= 7 = Sunday.
    #[arg(long, default_value_t = 0)]
    weekday: u8,
    #[arg(long, default_value_t = 0)]
    hour: u8,
    #[arg(long, default_value_t = 0)]
    minute: u8,
    #[arg(long, default_value_t = 0)]
    second: u8,
    #[arg(long)]
    fault: bool,
    #[arg(long)]
    working_day: bool,
    #[arg(long)]
    no_working_day: bool,
    #[arg(long)]
    no_year: bool,
    #[arg(long)]
    no_date: bool,
    #[arg(long)]
    no_day_of_week: bool,
    #[arg(long)]
    no_time: bool,
    #[arg(long)]
    summer_time: bool,
    #[arg(long)]
    clock_quality: bool,
    /// Fail on an invalid record instead of printing the all-zero payload.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let base = if args.now {
        DateTime::try_from(chrono::Local::now().naive_local())?
    } else {
        DateTime::new(
            args.year, args.month, args.day, args.hour, args.minute, args.second,
        )
        .with_day_of_week(args.weekday)
    };
    let dt = DateTime {
        fault: args.fault,
        working_day: args.working_day,
        no_working_day: args.no_working_day,
        no_year: args.no_year,
        no_date: args.no_date,
        no_day_of_week: args.no_day_of_week,
        no_time: args.no_time,
        summer_time: args.summer_time,
        clock_quality: args.clock_quality,
        ..base
    };
    log::debug!("encoding {dt}");

    let bytes = if args.strict {
        match dt.try_to_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("encode failed for {dt}: {e}");
                std::process::exit(1);
            }
        }
    } else {
        if !dt.is_valid() {
            log::warn!("{dt} is not a valid date/time, payload is all zero");
        }
        dt.to_bytes()
    };
    println!("{}", to_hex(&bytes));
    Ok(())
}
