//! GPS fix quality.

macro_rules! fix_quality_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal, $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $code,
            )*
            /// Absent or not reported
            #[default]
            Unknown = 255,
        }

        impl $name {
            /// Maps a mode indicator character (as found in GNS, RMC, VTG) to a fix quality.
            pub fn from_char(c: char) -> Option<Self> {
                match c {
                    $($char => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Maps a GGA quality indicator to a fix quality.
            pub fn from_quality(code: i64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

fix_quality_enum! {
    /// Kind and confidence of a positioning fix.
    ///
    /// The discriminant is the GGA quality indicator; [`GpsMode::Unknown`] is the
    /// sentinel used for absent values.
    ///
    /// ```rust
    /// use nmea0183_schema::GpsMode;
    ///
    /// assert_eq!(GpsMode::from_char('A'), Some(GpsMode::Autonomous));
    /// assert_eq!(GpsMode::from_quality(4), Some(GpsMode::RtkFixed));
    /// assert_eq!(u8::from(GpsMode::Unknown), 255);
    /// assert_eq!(GpsMode::from_char('X'), None);
    /// ```
    pub enum GpsMode {
        /// N / 0 - Fix not available
        0, 'N' => NoFix,
        /// A / 1 - Autonomous GNSS fix
        1, 'A' => Autonomous,
        /// D / 2 - Differential GNSS fix
        2, 'D' => Differential,
        /// P / 3 - Precise (PPS) fix
        3, 'P' => Precise,
        /// R / 4 - Real Time Kinematic, fixed integers
        4, 'R' => RtkFixed,
        /// F / 5 - Real Time Kinematic, float integers
        5, 'F' => RtkFloat,
        /// E / 6 - Estimated (dead reckoning)
        6, 'E' => Estimated,
        /// M / 7 - Manual input
        7, 'M' => Manual,
        /// S / 8 - Simulator
        8, 'S' => Simulator,
    }
}

impl From<GpsMode> for u8 {
    fn from(mode: GpsMode) -> Self {
        mode as u8
    }
}
