use crate::Error;

/// Bring a longitude (degrees) back toward [-180, 180] by at most one full turn.
/// Values beyond ±540 stay outside the interval.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if longitude > 180. {
        return longitude - 360.;
    }
    if longitude < -180. {
        return longitude + 360.;
    }
    longitude
}

/// Reflect a latitude (degrees) that has passed over a pole back into [-90, 90].
pub fn normalize_latitude(latitude: f64) -> f64 {
    if latitude > 90. {
        return 180. - latitude;
    }
    if latitude < -90. {
        return -(latitude + 180.);
    }
    latitude
}

/// Split degrees-with-decimals into (degrees, minutes, seconds-with-decimals).
/// The sign is carried by the degree component only, so it is lost for
/// angles in the open interval (-1°, 0°).
pub fn decdeg_to_dms(dd: f64) -> (i32, u32, f64) {
    let positive = dd >= 0.;
    let total = dd.abs() * 3600.;
    let seconds = total % 60.;
    let minutes = ((total - seconds) / 60.).round();
    let degrees = (minutes / 60.).floor();
    let minutes = minutes % 60.;

    let degrees = degrees as i32;
    let degrees = if positive { degrees } else { -degrees };
    (degrees, minutes as u32, seconds)
}

/// Fixed format degrees/minutes/seconds text, e.g. `" 45° 30′\u{2009} 36.00″"`:
/// a sign column (space or minus), two-digit zero padded degrees and minutes,
/// and seconds with two decimals.
pub fn dms_str(dd: f64) -> String {
    let (d, m, s) = decdeg_to_dms(dd);
    let sign = if d < 0 { '-' } else { ' ' };
    format!("{sign}{:02}° {m:02}′\u{2009} {s:05.2}″", d.abs())
}

/// Simplistic transformation from degrees, minutes and seconds-with-decimals
/// to degrees-with-decimals. Sign taken from the degree component, with
/// `negative` covering the case of a zero degree component.
pub fn dms_to_dd(d: i32, m: u32, s: f64, negative: bool) -> f64 {
    let value = d.abs() as f64 + (m as f64 + s / 60.) / 60.;
    if negative || d < 0 {
        return -value;
    }
    value
}

/// Parse an angle given either as decimal degrees, `"55.75"`, or as
/// colon separated degrees, minutes and seconds, `"55:45:00"` or `"-0:30"`.
pub fn parse_angle(text: &str) -> Result<f64, Error> {
    let text = text.trim();
    let bad = || Error::Syntax(format!("Cannot parse angle '{text}'"));

    if !text.contains(':') {
        return text.parse::<f64>().map_err(|_| bad());
    }

    let parts: Vec<&str> = text.split(':').map(|p| p.trim()).collect();
    if parts.len() > 3 {
        return Err(bad());
    }
    let negative = parts[0].starts_with('-');
    let d = parts[0].parse::<i32>().map_err(|_| bad())?;
    let m = match parts.get(1) {
        Some(m) => m.parse::<u32>().map_err(|_| bad())?,
        None => 0,
    };
    let s = match parts.get(2) {
        Some(s) => s.parse::<f64>().map_err(|_| bad())?,
        None => 0.,
    };
    if m >= 60 || !(0. ..60.).contains(&s) {
        return Err(bad());
    }
    Ok(dms_to_dd(d, m, s, negative))
}

// ----- Tests ---------------------------------------------------------------------
