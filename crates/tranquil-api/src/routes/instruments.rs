use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use tranquil_instruments::scoring::{Domain, ResponseOption};
use tranquil_instruments::severity::SeverityTable;
use tranquil_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    domains: Vec<Domain>,
    response_options: Vec<ResponseOption>,
    severity_tables: Vec<SeverityTable>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        domains: instrument.domains().to_vec(),
        response_options: instrument.response_options().to_vec(),
        severity_tables: instrument.severity_tables(),
    }))
}
