use amlich::{CalendarConfig, CanChiBasis, CivilDate, LunarCalendar};
use chrono::Local;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("amlich=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let calendar = LunarCalendar::new(CalendarConfig::vietnam())?;
    let today = CivilDate::from(Local::now().date_naive());
    let c = calendar.convert(today);
    println!("{today}: âm lịch {}", c.lunar);
    println!(
        "  ngày {}, tháng {}, năm {}",
        c.can_chi.day, c.can_chi.month, c.can_chi.year
    );

    let lunar_basis =
        LunarCalendar::new(CalendarConfig::vietnam().with_can_chi_basis(CanChiBasis::Lunar))?;
    let start = CivilDate::new(2023, 3, 20)?;
    let end = CivilDate::new(2023, 3, 26)?;
    for r in lunar_basis.convert_range(start, end)? {
        println!(
            "{} (thứ {}) {:<18} {} / {} / {}",
            r.solar,
            r.weekday,
            r.lunar.to_string(),
            r.can_chi.day,
            r.can_chi.month,
            r.can_chi.year
        );
    }
    Ok(())
}
