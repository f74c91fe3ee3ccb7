use crate::model::real_estate::RealEstateDto;

/// Prague city centre
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 50.0755,
    lon: 14.4378,
};
pub const DEFAULT_ZOOM: u8 = 11;
/// Zoom for a single marker, also the cap when fitting several
pub const MAX_FIT_ZOOM: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point, `None` for no points.
    pub fn around(points: &[LatLng]) -> Option<Self> {
        let first = *points.first()?;

        Some(points.iter().fold(
            Self {
                south_west: first,
                north_east: first,
            },
            |bounds, point| Self {
                south_west: LatLng {
                    lat: bounds.south_west.lat.min(point.lat),
                    lon: bounds.south_west.lon.min(point.lon),
                },
                north_east: LatLng {
                    lat: bounds.north_east.lat.max(point.lat),
                    lon: bounds.north_east.lon.max(point.lon),
                },
            },
        ))
    }

    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lon: (self.south_west.lon + self.north_east.lon) / 2.0,
        }
    }
}

/// Viewport to show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapView {
    Center { center: LatLng, zoom: u8 },
    Fit { bounds: Bounds, max_zoom: u8 },
}

impl MapView {
    /// Viewport showing every point: the default Prague view for none, a close-up
    /// for one, and the bounding box with capped zoom otherwise.
    pub fn fit(points: &[LatLng]) -> Self {
        match points {
            [] => Self::Center {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
            [point] => Self::Center {
                center: *point,
                zoom: MAX_FIT_ZOOM,
            },
            _ => match Bounds::around(points) {
                Some(bounds) => Self::Fit {
                    bounds,
                    max_zoom: MAX_FIT_ZOOM,
                },
                None => Self::fit(&[]),
            },
        }
    }

    /// Bounding box as `(west, south, east, north)`.
    ///
    /// A centred view spans the width of one tile at its zoom level.
    pub fn bbox(&self) -> (f64, f64, f64, f64) {
        match self {
            Self::Center { center, zoom } => {
                let half = 180.0 / f64::from(1u32 << (*zoom).min(20));
                (
                    center.lon - half,
                    center.lat - half / 2.0,
                    center.lon + half,
                    center.lat + half / 2.0,
                )
            }
            Self::Fit { bounds, .. } => (
                bounds.south_west.lon,
                bounds.south_west.lat,
                bounds.north_east.lon,
                bounds.north_east.lat,
            ),
        }
    }

    /// OpenStreetMap embed URL for this viewport, marking `marker` if given.
    pub fn embed_url(&self, marker: Option<LatLng>) -> String {
        let (west, south, east, north) = self.bbox();
        let mut url = format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={},{},{},{}&layer=mapnik",
            west, south, east, north
        );

        if let Some(marker) = marker {
            url.push_str(&format!("&marker={},{}", marker.lat, marker.lon));
        }

        url
    }
}

/// Splits listings into those with stored coordinates, which can be shown at once,
/// and those that need geocoding.
pub fn partition(estates: &[RealEstateDto]) -> (Vec<(RealEstateDto, LatLng)>, Vec<RealEstateDto>) {
    let mut located = Vec::new();
    let mut pending = Vec::new();

    for estate in estates {
        match estate.locality.coordinates() {
            Some(point) => located.push((estate.clone(), point.into())),
            None => pending.push(estate.clone()),
        }
    }

    (located, pending)
}
