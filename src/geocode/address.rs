//! Place fields from a Nominatim reverse response.

use serde::Deserialize;
use serde_json::Value;

use crate::error_handling::LookupError;
use crate::models::GeocodeResult;

/// The subset of Nominatim's `address` object we read.
#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    hamlet: Option<String>,
    state: Option<String>,
    region: Option<String>,
    country: Option<String>,
}

/// Extracts city, admin region and country from a reverse response body.
///
/// City is the first non-blank of `city`, `town`, `village`, `municipality`,
/// `hamlet`; admin is `state` then `region`.
///
/// # Errors
///
/// `LookupError::NoAddress` when the body has no `address` object (Nominatim
/// answers `{"error": "Unable to geocode"}` over open water), and
/// `LookupError::MalformedResponse` when `address` has an unexpected shape.
pub fn place_from_response(body: &Value) -> Result<GeocodeResult, LookupError> {
    let address = match body.get("address") {
        Some(address @ Value::Object(_)) => address.clone(),
        Some(Value::Null) | None => return Err(LookupError::NoAddress),
        Some(_) => return Err(LookupError::MalformedResponse),
    };
    let address: Address =
        serde_json::from_value(address).map_err(|_| LookupError::MalformedResponse)?;

    let city = first_present(&[
        &address.city,
        &address.town,
        &address.village,
        &address.municipality,
        &address.hamlet,
    ]);
    let admin = first_present(&[&address.state, &address.region]);

    Ok(GeocodeResult::new(city, admin, address.country.as_deref()))
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|c| !c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_city_preferred_over_town() {
        let body = json!({
            "address": {"city": "Lyon", "town": "Villeurbanne", "state": "Auvergne-Rhône-Alpes", "country": "France"}
        });
        let place = place_from_response(&body).expect("address present");
        assert_eq!(
            place,
            GeocodeResult::new(Some("Lyon"), Some("Auvergne-Rhône-Alpes"), Some("France"))
        );
    }

    #[test]
    fn test_falls_through_to_hamlet_and_region() {
        let body = json!({
            "address": {"hamlet": "Le Bourg", "region": "Metropolitan France", "country": "France"}
        });
        let place = place_from_response(&body).expect("address present");
        assert_eq!(place.city.as_deref(), Some("Le Bourg"));
        assert_eq!(place.admin.as_deref(), Some("Metropolitan France"));
    }

    #[test]
    fn test_blank_city_skipped() {
        let body = json!({"address": {"city": "", "village": "Gordes"}});
        let place = place_from_response(&body).expect("address present");
        assert_eq!(place.city.as_deref(), Some("Gordes"));
        assert!(place.admin.is_none());
        assert!(place.country.is_none());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let body = json!({
            "place_id": 1,
            "address": {"road": "Rue de Rivoli", "postcode": "75001", "country_code": "fr", "country": "France"}
        });
        let place = place_from_response(&body).expect("address present");
        assert_eq!(place, GeocodeResult::new(None, None, Some("France")));
    }

    #[test]
    fn test_missing_address_is_no_address() {
        let body = json!({"error": "Unable to geocode"});
        assert_eq!(place_from_response(&body), Err(LookupError::NoAddress));
    }

    #[test]
    fn test_non_object_address_is_malformed() {
        let body = json!({"address": "Paris"});
        assert_eq!(place_from_response(&body), Err(LookupError::MalformedResponse));
        let body = json!({"address": {"city": 42}});
        assert_eq!(place_from_response(&body), Err(LookupError::MalformedResponse));
    }
}
