//! The two collections served with the paginated envelope.

use std::fmt;

/// A collection intercepted by the query processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Events,
    Registrants,
}

impl Resource {
    /// Collection name in the dataset; also the envelope's body key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Registrants => "registrants",
        }
    }

    /// Envelope key carrying the filtered record count.
    #[must_use]
    pub const fn total_key(self) -> &'static str {
        match self {
            Self::Events => "totalevents",
            Self::Registrants => "totalregistrants",
        }
    }

    /// Whether `startDate`/`endDate` select a `lastactivity` range.
    #[must_use]
    pub const fn supports_date_range(self) -> bool {
        matches!(self, Self::Registrants)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
