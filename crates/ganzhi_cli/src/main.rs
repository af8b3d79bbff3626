use std::fmt::Display;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use clap::{Args, Parser, Subcommand};
use ganzhi_base::{ALL_STEMS, Branch, Stem, relation};
use ganzhi_calendar::{AstronomicalCalendar, SexagenaryCalendar};
use ganzhi_chart::{
    BaziChart, BirthDate, BirthInput, BirthPlace, Gender, compute_chart, default_lunar_birth_time,
    fortnight_almanac, four_pillars, pillars_now,
};
use ganzhi_geo::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, FixedResolver, GeoPoint,
    GeoResolver, GeocoderConfig, cached_nominatim,
};
use ganzhi_time::{format_civil, parse_civil, parse_date, true_solar_offset_seconds, true_solar_time};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Sexagenary (ganzhi) chart and calendar CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GeocoderArgs {
    /// Geocoder search endpoint
    #[arg(long, env = "GANZHI_GEOCODER_URL", default_value = DEFAULT_ENDPOINT)]
    geocoder_url: String,
    /// User agent sent to the geocoder
    #[arg(long, env = "GANZHI_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Geocoder request timeout in seconds
    #[arg(long, env = "GANZHI_GEOCODER_TIMEOUT_SECS", default_value_t = 10)]
    geocoder_timeout_secs: u64,
}

impl GeocoderArgs {
    fn config(&self) -> GeocoderConfig {
        GeocoderConfig::default()
            .with_endpoint(self.geocoder_url.clone())
            .with_user_agent(self.user_agent.clone())
            .with_timeout(Duration::from_secs(self.geocoder_timeout_secs))
            .with_cache_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: four pillars and fortune cycle
    Chart {
        /// Birth time "YYYY-MM-DD HH:MM:SS" (UTC+8), or a lunar date
        /// "YYYY-MM-DD" with --lunar
        birth: String,
        /// Birth place, resolved with the geocoder
        #[arg(long)]
        place: Option<String>,
        /// Longitude in degrees east (skips geocoding, needs --lat)
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,
        /// Latitude in degrees north
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,
        /// male/female (or 男/女)
        #[arg(long)]
        gender: String,
        /// Reference "now" for the current decade (default: system clock)
        #[arg(long)]
        now: Option<String>,
        /// Interpret BIRTH as a lunar date
        #[arg(long)]
        lunar: bool,
        /// The lunar month is a leap month
        #[arg(long, requires = "lunar")]
        leap: bool,
        /// Time of day for a lunar birth, HH:MM:SS (default 12:00:00)
        #[arg(long, requires = "lunar")]
        time: Option<String>,
        #[command(flatten)]
        geocoder: GeocoderArgs,
    },
    /// Four pillars of an already corrected timestamp
    Pillars {
        /// "YYYY-MM-DD HH:MM:SS"
        time: String,
    },
    /// Lunar date of a Gregorian date
    SolarToLunar {
        /// YYYY-MM-DD
        date: String,
    },
    /// Gregorian date of a lunar date
    LunarToSolar {
        year: i32,
        month: u8,
        day: u8,
        /// Leap month
        #[arg(long)]
        leap: bool,
    },
    /// Next major solar term after a date
    NextTerm {
        /// YYYY-MM-DD
        date: String,
    },
    /// Previous major solar term before a date
    PrevTerm {
        /// YYYY-MM-DD
        date: String,
    },
    /// Longitude-only true solar time
    TrueSolar {
        /// "YYYY-MM-DD HH:MM:SS" (UTC+8)
        time: String,
        /// Longitude in degrees east
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Ten-god relation of a stem to the day stem
    Relation {
        /// Day stem (hanzi or pinyin)
        day: String,
        /// Other stem (hanzi or pinyin)
        other: String,
    },
    /// Today's pillars and two weeks of day pillars from Monday
    Almanac {
        /// Reference date YYYY-MM-DD (default: today, UTC+8)
        #[arg(long)]
        date: Option<String>,
    },
    /// Resolve a place name to coordinates
    Geocode {
        query: String,
        #[command(flatten)]
        geocoder: GeocoderArgs,
    },
}

fn exit_with<E: Display>(context: &str, e: E) -> ! {
    eprintln!("{context}: {e}");
    std::process::exit(1);
}

fn or_exit<T, E: Display>(result: Result<T, E>, context: &str) -> T {
    result.unwrap_or_else(|e| exit_with(context, e))
}

/// Current civil time on the UTC+8 meridian.
fn now_cst() -> NaiveDateTime {
    Utc::now().naive_utc() + TimeDelta::hours(8)
}

fn parse_stem(s: &str) -> Stem {
    let s = s.trim();
    ALL_STEMS
        .iter()
        .copied()
        .find(|stem| stem.hanzi() == s || stem.pinyin().eq_ignore_ascii_case(s))
        .unwrap_or_else(|| {
            eprintln!("Invalid stem: {s}");
            eprintln!("Valid: 甲 乙 丙 丁 戊 己 庚 辛 壬 癸 (or pinyin, e.g. Jia)");
            std::process::exit(1);
        })
}

fn parse_gender(s: &str) -> Gender {
    Gender::from_label(s).unwrap_or_else(|| {
        eprintln!("Invalid gender: {s} (male/female)");
        std::process::exit(1);
    })
}

/// Lunar "YYYY-MM-DD"; not validated as a Gregorian date since lunar
/// months may have a 30th day.
fn parse_lunar_ymd(s: &str) -> (i32, u8, u8) {
    let parts: Vec<&str> = s.trim().split('-').collect();
    let parsed = match parts.as_slice() {
        [y, m, d] => y
            .parse::<i32>()
            .ok()
            .zip(m.parse::<u8>().ok())
            .zip(d.parse::<u8>().ok())
            .map(|((y, m), d)| (y, m, d)),
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        eprintln!("Invalid lunar date: {s} (expected YYYY-MM-DD)");
        std::process::exit(1);
    })
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) {
    if json {
        println!("{}", or_exit(serde_json::to_string_pretty(value), "JSON encoding failed"));
    } else {
        text(value);
    }
}

fn print_chart(chart: &BaziChart) {
    let f = &chart.fortune;
    println!(
        "Birth (civil):   {}  lon {:.4} lat {:.4}",
        format_civil(chart.civil),
        chart.location.longitude,
        chart.location.latitude
    );
    println!(
        "True solar time: {} {}",
        format_civil(chart.corrected),
        chart.shichen
    );
    println!(
        "Lunar date:      {} ({})",
        chart.lunar.sexagenary_label(),
        chart.lunar
    );
    println!("Four pillars:    {}", chart.pillars);
    println!(
        "Fortune:         {} ({}), boundary {}",
        f.direction.hanzi(),
        chart.gender.hanzi(),
        f.boundary
    );
    println!(
        "Onset:           {}y {}m {}d (decades anchored at age {})",
        f.onset.years, f.onset.months, f.onset.days, f.age_at_onset
    );
    println!(
        "Handover:        {}-{:02}",
        f.handover.year, f.handover.month
    );
    for (i, d) in f.decades.iter().enumerate() {
        let marker = if f.current == Some(i) { " <- current" } else { "" };
        println!(
            "  {:>3} {:>5}  {}  {}{}",
            d.start_age, d.start_year, d.pillar, d.relation, marker
        );
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json = cli.json;
    let cal = AstronomicalCalendar::new();

    match cli.command {
        Commands::Chart {
            birth,
            place,
            lon,
            lat,
            gender,
            now,
            lunar,
            leap,
            time,
            geocoder,
        } => {
            let date = if lunar {
                let (year, month, day) = parse_lunar_ymd(&birth);
                let time = match time {
                    Some(t) => or_exit(
                        NaiveTime::parse_from_str(&t, "%H:%M:%S"),
                        "Invalid time of day",
                    ),
                    None => default_lunar_birth_time(),
                };
                BirthDate::Lunar {
                    year,
                    month,
                    day,
                    is_leap: leap,
                    time,
                }
            } else {
                BirthDate::Solar(or_exit(parse_civil(&birth), "Invalid birth time"))
            };

            let (place, geo): (BirthPlace, Box<dyn GeoResolver>) = match (lon, lat, place) {
                (Some(longitude), Some(latitude), _) => {
                    let point = GeoPoint {
                        longitude,
                        latitude,
                    };
                    (
                        BirthPlace::Coordinates(point),
                        Box::new(FixedResolver(point)) as Box<dyn GeoResolver>,
                    )
                }
                (_, _, Some(text)) => {
                    let config = geocoder.config();
                    debug!(?config, "geocoder configured");
                    let resolver = or_exit(cached_nominatim(&config), "Geocoder setup failed");
                    (
                        BirthPlace::Named(text),
                        Box::new(resolver) as Box<dyn GeoResolver>,
                    )
                }
                _ => exit_with("Missing birth place", "give --place or --lon/--lat"),
            };

            let now = match now {
                Some(s) => or_exit(parse_civil(&s), "Invalid --now"),
                None => now_cst(),
            };
            let input = BirthInput {
                date,
                place,
                gender: parse_gender(&gender),
            };
            let chart = or_exit(
                compute_chart(&cal, geo.as_ref(), &input, now),
                "Chart computation failed",
            );
            emit(json, &chart, print_chart);
        }

        Commands::Pillars { time } => {
            let t = or_exit(parse_civil(&time), "Invalid timestamp");
            let pillars = or_exit(four_pillars(&cal, t), "Calendar error");
            emit(json, &pillars, |p| {
                println!("{p}");
                println!(
                    "Day master: {} ({}{})",
                    p.day_master().hanzi(),
                    p.day_master().polarity().hanzi(),
                    p.day_master().element().hanzi()
                );
            });
        }

        Commands::SolarToLunar { date } => {
            let d = or_exit(parse_date(&date), "Invalid date");
            let l = or_exit(cal.solar_to_lunar(d), "Calendar error");
            emit(json, &l, |l| {
                println!(
                    "{l} ({}-{:02}-{:02}{})",
                    l.year,
                    l.month,
                    l.day,
                    if l.is_leap { " leap" } else { "" }
                )
            });
        }

        Commands::LunarToSolar {
            year,
            month,
            day,
            leap,
        } => {
            let d = or_exit(cal.lunar_to_solar(year, month, day, leap), "Calendar error");
            emit(json, &d, |d| println!("{d}"));
        }

        Commands::NextTerm { date } => {
            let d = or_exit(parse_date(&date), "Invalid date");
            let ev = or_exit(cal.next_major_term(d), "Term search failed");
            emit(json, &ev, |ev| println!("{ev}"));
        }

        Commands::PrevTerm { date } => {
            let d = or_exit(parse_date(&date), "Invalid date");
            let ev = or_exit(cal.previous_major_term(d), "Term search failed");
            emit(json, &ev, |ev| println!("{ev}"));
        }

        Commands::TrueSolar { time, lon } => {
            let civil = or_exit(parse_civil(&time), "Invalid timestamp");
            let corrected = true_solar_time(civil, lon);
            let offset = true_solar_offset_seconds(lon);
            let value = json!({
                "civil": civil,
                "longitude": lon,
                "offset_seconds": offset,
                "corrected": corrected,
            });
            emit(json, &value, |_| {
                println!(
                    "{} ({:+.1} s) {}时",
                    format_civil(corrected),
                    offset,
                    Branch::from_hour(corrected.hour()).hanzi()
                )
            });
        }

        Commands::Relation { day, other } => {
            let day = parse_stem(&day);
            let other = parse_stem(&other);
            let label = relation(day, other);
            let value = json!({
                "day": day.hanzi(),
                "other": other.hanzi(),
                "relation": label,
            });
            emit(json, &value, |_| {
                println!("{} -> {}: {label}", day.hanzi(), other.hanzi())
            });
        }

        Commands::Almanac { date } => {
            let today: NaiveDate = match date {
                Some(s) => or_exit(parse_date(&s), "Invalid date"),
                None => now_cst().date(),
            };
            let noon = today.and_time(default_lunar_birth_time());
            let current = or_exit(pillars_now(&cal, noon), "Calendar error");
            let days = or_exit(fortnight_almanac(&cal, today), "Calendar error");
            let value = json!({
                "date": today,
                "year": current.year,
                "month": current.month,
                "day": current.day,
                "fortnight": days,
            });
            emit(json, &value, |_| {
                println!("{today}: {}年 {}月 {}日", current.year, current.month, current.day);
                for d in &days {
                    let marker = if d.date == today { " <- today" } else { "" };
                    println!("  {} {} {}日{marker}", d.weekday, d.date, d.day_pillar);
                }
            });
        }

        Commands::Geocode { query, geocoder } => {
            let config = geocoder.config();
            debug!(?config, "geocoder configured");
            let resolver = or_exit(cached_nominatim(&config), "Geocoder setup failed");
            let point = or_exit(resolver.resolve(&query), "Geocoding failed");
            emit(json, &point, |p| {
                println!("{query}: lon {:.4} lat {:.4}", p.longitude, p.latitude)
            });
        }
    }
}
