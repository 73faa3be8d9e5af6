//! Static service, home-size, and frequency catalogs.
//!
//! These tables are fixed at compile time and shared by both pricing
//! engines. The string ids match the values the booking form submits.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Offered cleaning services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Standard,
    Deep,
    MoveOut,
}

impl ServiceType {
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "standard" => Some(ServiceType::Standard),
            "deep" => Some(ServiceType::Deep),
            "moveout" => Some(ServiceType::MoveOut),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ServiceType::Standard => "standard",
            ServiceType::Deep => "deep",
            ServiceType::MoveOut => "moveout",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ServiceType::Standard => "Standard Cleaning",
            ServiceType::Deep => "Deep Cleaning",
            ServiceType::MoveOut => "Move-Out Cleaning",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ServiceType::Standard => {
                "Regular cleaning of all rooms, dusting, vacuuming, mopping"
            }
            ServiceType::Deep => {
                "Thorough cleaning including baseboards, inside appliances, detailed work"
            }
            ServiceType::MoveOut => {
                "Complete cleaning for moving out, includes inside cabinets, oven, fridge"
            }
        }
    }

    /// Base hourly rate, used by the hourly engine and by the flat-rate
    /// engine for services without a chart price
    pub fn hourly_rate(self) -> Decimal {
        match self {
            ServiceType::Standard => dec!(35),
            ServiceType::Deep => dec!(45),
            ServiceType::MoveOut => dec!(50),
        }
    }
}

/// Home size buckets used by the hourly engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeSize {
    Studio,
    TwoBr,
    ThreeBr,
    FourBr,
    Large,
}

impl HomeSize {
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "studio" => Some(HomeSize::Studio),
            "2br" => Some(HomeSize::TwoBr),
            "3br" => Some(HomeSize::ThreeBr),
            "4br" => Some(HomeSize::FourBr),
            "large" => Some(HomeSize::Large),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            HomeSize::Studio => "studio",
            HomeSize::TwoBr => "2br",
            HomeSize::ThreeBr => "3br",
            HomeSize::FourBr => "4br",
            HomeSize::Large => "large",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HomeSize::Studio => "Studio/1BR",
            HomeSize::TwoBr => "2 Bedroom",
            HomeSize::ThreeBr => "3 Bedroom",
            HomeSize::FourBr => "4+ Bedroom",
            HomeSize::Large => "Large Home (5+ BR)",
        }
    }

    /// Estimated single-cleaner hours for this size
    pub fn base_hours(self) -> Decimal {
        match self {
            HomeSize::Studio => dec!(2),
            HomeSize::TwoBr => dec!(3),
            HomeSize::ThreeBr => dec!(4),
            HomeSize::FourBr => dec!(5),
            HomeSize::Large => dec!(6),
        }
    }
}

/// Bedroom-count axis used by the flat-rate engine's charts and formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bedrooms {
    Studio,
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Bedrooms {
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "studio" => Some(Bedrooms::Studio),
            "1br" => Some(Bedrooms::One),
            "2br" => Some(Bedrooms::Two),
            "3br" => Some(Bedrooms::Three),
            "4br" => Some(Bedrooms::Four),
            "5br" => Some(Bedrooms::Five),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Bedrooms::Studio => "studio",
            Bedrooms::One => "1br",
            Bedrooms::Two => "2br",
            Bedrooms::Three => "3br",
            Bedrooms::Four => "4br",
            Bedrooms::Five => "5br",
        }
    }

    /// Bedroom count for the standard-hours formula. A studio counts as
    /// half a bedroom.
    pub fn count_equivalent(self) -> Decimal {
        match self {
            Bedrooms::Studio => dec!(0.5),
            Bedrooms::One => dec!(1),
            Bedrooms::Two => dec!(2),
            Bedrooms::Three => dec!(3),
            Bedrooms::Four => dec!(4),
            Bedrooms::Five => dec!(5),
        }
    }
}

/// Recurrence frequency for a booking.
///
/// The two pricing engines evolved separate discount tables for the same
/// frequencies. They are intentionally kept as distinct methods here:
/// merging them would change real price outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    OneTime,
    Weekly,
    BiWeekly,
    Monthly,
    Custom,
}

impl Frequency {
    /// Both `biweekly` and `bi-weekly` appear in submitted forms
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "one-time" => Some(Frequency::OneTime),
            "weekly" => Some(Frequency::Weekly),
            "biweekly" | "bi-weekly" => Some(Frequency::BiWeekly),
            "monthly" => Some(Frequency::Monthly),
            "custom" => Some(Frequency::Custom),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Monthly => "monthly",
            Frequency::Custom => "custom",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Frequency::OneTime => "One-time cleaning",
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-weekly (every 2 weeks)",
            Frequency::Monthly => "Monthly",
            Frequency::Custom => "Custom schedule",
        }
    }

    /// Discount fraction used by the hourly engine
    pub fn hourly_discount(self) -> Decimal {
        match self {
            Frequency::OneTime => Decimal::ZERO,
            Frequency::Weekly => dec!(0.15),
            Frequency::BiWeekly => dec!(0.10),
            Frequency::Monthly => dec!(0.05),
            Frequency::Custom => Decimal::ZERO,
        }
    }

    /// Discount fraction used by the flat-rate engine. Custom schedules
    /// are priced like one-time cleans.
    pub fn flat_rate_discount(self) -> Decimal {
        match self {
            Frequency::OneTime => dec!(0.15),
            Frequency::Weekly => dec!(0.30),
            Frequency::BiWeekly => dec!(0.25),
            Frequency::Monthly => dec!(0.15),
            Frequency::Custom => dec!(0.15),
        }
    }
}
