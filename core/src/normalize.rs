//! The single translation boundary between wire records and `Record`s.

use crate::error::ApiError;
use crate::types::{
    Person, Planet, RawPerson, RawPlanet, RawStarship, Record, ResourceKind, Starship,
};

/// Extract the canonical id from a resource url ending in `/<digits>/`.
///
/// Every well-formed catalog record satisfies this; a failure means the
/// upstream data broke its contract and is reported, never defaulted.
pub fn extract_id(url: &str) -> Result<String, ApiError> {
    let malformed = || ApiError::MalformedResource {
        resource: url.to_string(),
    };
    let trimmed = url.strip_suffix('/').ok_or_else(malformed)?;
    let (_, segment) = trimmed.rsplit_once('/').ok_or_else(malformed)?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    Ok(segment.to_string())
}

impl Record for Person {
    const KIND: ResourceKind = ResourceKind::Person;
    type Raw = RawPerson;

    fn normalize(raw: RawPerson) -> Result<Self, ApiError> {
        Ok(Person {
            id: extract_id(&raw.url)?,
            name: raw.name,
            gender: raw.gender,
            birth_year: raw.birth_year,
            eye_color: raw.eye_color,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Gender", self.gender.as_str()),
            ("Birth Year", self.birth_year.as_str()),
            ("Eye Color", self.eye_color.as_str()),
        ]
    }
}

impl Record for Starship {
    const KIND: ResourceKind = ResourceKind::Starship;
    type Raw = RawStarship;

    fn normalize(raw: RawStarship) -> Result<Self, ApiError> {
        Ok(Starship {
            id: extract_id(&raw.url)?,
            name: raw.name,
            model: raw.model,
            manufacturer: raw.manufacturer,
            cost_in_credits: raw.cost_in_credits,
            length: raw.length,
            crew: raw.crew,
            passengers: raw.passengers,
            cargo_capacity: raw.cargo_capacity,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Model", self.model.as_str()),
            ("Manufacturer", self.manufacturer.as_str()),
            ("Cost in credits", self.cost_in_credits.as_str()),
            ("Length", self.length.as_str()),
            ("Crew", self.crew.as_str()),
            ("Passengers", self.passengers.as_str()),
            ("Cargo capacity", self.cargo_capacity.as_str()),
        ]
    }
}

impl Record for Planet {
    const KIND: ResourceKind = ResourceKind::Planet;
    type Raw = RawPlanet;

    fn normalize(raw: RawPlanet) -> Result<Self, ApiError> {
        Ok(Planet {
            id: extract_id(&raw.url)?,
            name: raw.name,
            population: raw.population,
            rotation_period: raw.rotation_period,
            diameter: raw.diameter,
        })
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Population", self.population.as_str()),
            ("Rotation Period", self.rotation_period.as_str()),
            ("Diameter", self.diameter.as_str()),
        ]
    }
}
