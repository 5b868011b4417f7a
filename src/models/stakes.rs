use std::fmt;

/// Cash game blinds, parsed from the `"sb/bb"` text stored on a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stakes {
    pub small: f64,
    pub big: f64,
}

impl Stakes {
    /// Parse `"1/3"`, `"0.5/1"`, `"$2/$5"`.
    ///
    /// The big blind is the token after the last `/`; anything before it is
    /// the small blind. Returns `None` when either side is not a number or
    /// the big blind is not positive.
    pub fn parse(s: &str) -> Option<Self> {
        let (small_raw, big_raw) = s.trim().rsplit_once('/')?;
        let small = parse_blind(small_raw)?;
        let big = parse_blind(big_raw)?;

        if big <= 0.0 {
            return None;
        }

        Some(Self { small, big })
    }

    /// Big blind only, the piece every BB/hr computation needs.
    pub fn big_blind_of(s: &str) -> Option<f64> {
        Self::parse(s).map(|st| st.big)
    }
}

fn parse_blind(raw: &str) -> Option<f64> {
    // "1/2/5" straddle-style strings keep everything before the last slash
    // as the "small" part; only its trailing token matters.
    let token = raw.rsplit('/').next()?.trim().trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.');
    let v: f64 = token.parse().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

impl fmt::Display for Stakes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", trim_float(self.small), trim_float(self.big))
    }
}

fn trim_float(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
