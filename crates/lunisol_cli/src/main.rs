use clap::{Parser, Subcommand, ValueEnum};
use lunisol_ephem::elongation_deg;
use lunisol_holidays::{CalendarEngine, Location, Tradition, christian};
use lunisol_search::{scan_crossings, sunrise, sunset};
use lunisol_time::{CivilDateTime, calendar_to_jd, jd_tt_to_ut};

#[derive(Parser)]
#[command(name = "lunisol", about = "Movable-holiday calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TraditionArg {
    Gregorian,
    Islamic,
    Hindu,
    Chinese,
}

impl From<TraditionArg> for Tradition {
    fn from(arg: TraditionArg) -> Self {
        match arg {
            TraditionArg::Gregorian => Tradition::Gregorian,
            TraditionArg::Islamic => Tradition::Islamic,
            TraditionArg::Hindu => Tradition::Hindu,
            TraditionArg::Chinese => Tradition::Chinese,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Easter Sunday for a year
    Easter {
        /// Gregorian year
        year: i32,
        /// Orthodox (Julian computus) instead of Western
        #[arg(long)]
        orthodox: bool,
    },
    /// All holidays of a tradition for a year
    Holidays {
        /// Tradition to query
        #[arg(long, value_enum)]
        tradition: TraditionArg,
        /// Gregorian year
        year: i32,
        /// Observer latitude in degrees (north positive)
        #[arg(long, default_value = "0.0")]
        lat: f64,
        /// Observer longitude in degrees (east positive)
        #[arg(long, default_value = "0.0")]
        lon: f64,
        /// Fixed UTC offset in hours
        #[arg(long, default_value = "0.0")]
        utc_offset: f64,
    },
    /// Sunrise and sunset for a local civil date
    Sun {
        /// Local date (YYYY-MM-DD)
        date: String,
        /// Observer latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Observer longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Fixed UTC offset in hours
        #[arg(long, default_value = "0.0")]
        utc_offset: f64,
    },
    /// New moons (lunar conjunctions) in a year, in UT
    Newmoons {
        /// Gregorian year
        year: i32,
    },
}

/// Parse "YYYY-MM-DD" into (year, month, day).
fn parse_date(s: &str) -> Option<(i32, u32, u32)> {
    let mut parts = s.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some((year, month, day))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Easter { year, orthodox } => {
            let date = if orthodox {
                christian::orthodox_easter(year)
            } else {
                christian::western_easter(year)
            };
            println!("{date}");
        }

        Commands::Holidays {
            tradition,
            year,
            lat,
            lon,
            utc_offset,
        } => {
            let engine = CalendarEngine::new();
            let location = Location::new(lat, lon, utc_offset);
            let tradition = Tradition::from(tradition);
            let needs_location = tradition.needs_location();
            let result = engine.holidays_for_year(
                tradition,
                year,
                if needs_location { Some(&location) } else { None },
            );
            match result {
                Ok(map) => {
                    for (date, names) in &map {
                        println!("{date}  {names}");
                    }
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Sun {
            date,
            lat,
            lon,
            utc_offset,
        } => {
            let Some((year, month, day)) = parse_date(&date) else {
                eprintln!("error: expected date as YYYY-MM-DD");
                std::process::exit(1);
            };
            let day_start_ut = calendar_to_jd(year, month, day as f64) - utc_offset / 24.0;
            let rise = sunrise(day_start_ut, lat, lon);
            let set = sunset(day_start_ut, lat, lon);
            let print_local = |label: &str, jd_ut: f64, exact: bool| {
                let t = CivilDateTime::from_jd_ut(jd_ut + utc_offset / 24.0);
                println!(
                    "{label} {:04}-{:02}-{:02} {:02}:{:02} local{}",
                    t.year,
                    t.month,
                    t.day,
                    t.hour,
                    t.minute,
                    if exact { "" } else { "  (no crossing; local noon)" }
                );
            };
            print_local("sunrise", rise.jd_ut, rise.exact);
            print_local("sunset ", set.jd_ut, set.exact);
        }

        Commands::Newmoons { year } => {
            let start = calendar_to_jd(year, 1, 1.0);
            let end = calendar_to_jd(year + 1, 1, 1.0);
            for jd_tt in scan_crossings(elongation_deg, 0.0, start, end, 1.0) {
                println!("{}", CivilDateTime::from_jd_ut(jd_tt_to_ut(jd_tt)));
            }
        }
    }
}
