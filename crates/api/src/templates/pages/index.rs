use maud::{html, Markup};

use crate::{
    db::DateExtent,
    templates::layouts::{base, PageConfig},
};

struct RouteDoc {
    path: &'static str,
    description: &'static str,
}

const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        path: "/api/v1.0/precipitation",
        description: "Every station's daily precipitation reading as a JSON list of {date, station, prcp}.",
    },
    RouteDoc {
        path: "/api/v1.0/stations",
        description: "JSON list of station names in the dataset.",
    },
    RouteDoc {
        path: "/api/v1.0/tobs",
        description: "JSON list of {date, station, tobs} temperature observations for the 365 days ending at the last recorded date.",
    },
    RouteDoc {
        path: "/api/v1.0/<start>",
        description: "JSON list of the minimum, average and maximum temperature for all dates greater than or equal to start (YYYY-MM-DD).",
    },
    RouteDoc {
        path: "/api/v1.0/<start>/<end>",
        description: "JSON list of the minimum, average and maximum temperature for dates between start and end inclusive (YYYY-MM-DD).",
    },
];

/// Human readable index of the available routes and the dataset's date range.
pub fn index_page(api_base: &str, extent: &DateExtent) -> Markup {
    let config = PageConfig {
        title: "Climate API",
        api_base,
    };

    base(&config, content(api_base, extent))
}

fn content(api_base: &str, extent: &DateExtent) -> Markup {
    html! {
        div class="box" {
            p {
                "Observations are available from "
                strong id="earliest" { (extent.earliest.to_string()) }
                " to "
                strong id="latest" { (extent.latest.to_string()) }
                ". Dates outside this range are clamped to it."
            }
        }
        h2 class="title is-5" { "Available Routes" }
        table class="table is-fullwidth is-striped" {
            thead {
                tr {
                    th { "Route" }
                    th { "Returns" }
                }
            }
            tbody {
                @for route in ROUTES {
                    tr {
                        td { code { (api_base) (route.path) } }
                        td { (route.description) }
                    }
                }
            }
        }
    }
}
