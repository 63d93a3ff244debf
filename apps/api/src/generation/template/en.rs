use crate::generation::formatting::{floor_label, format_area, format_price, join_natural};
use crate::models::{Language, PropertyInput};

use super::{area_name, place, Phrasebook};

pub(crate) struct English;

const NEIGHBORHOODS: &[(&str, &str)] = &[
    (
        "campo de ourique",
        "Campo de Ourique is one of Lisbon's most desirable neighborhoods, known for its vibrant \
         cafés, green parks and excellent schools. With a strong local community and easy access \
         to the city center, it offers the perfect blend of charm and convenience.",
    ),
    (
        "chiado",
        "Chiado is the cultural heart of Lisbon, featuring elegant shopping streets, historic \
         theaters and charming plazas. This sophisticated neighborhood offers easy access to the \
         city's best restaurants and cultural attractions.",
    ),
    (
        "principe real",
        "Príncipe Real is an upscale neighborhood known for its beautiful gardens, antique shops \
         and trendy boutiques. It is perfect for those who appreciate refined living in the heart \
         of the city.",
    ),
    (
        "príncipe real",
        "Príncipe Real is an upscale neighborhood known for its beautiful gardens, antique shops \
         and trendy boutiques. It is perfect for those who appreciate refined living in the heart \
         of the city.",
    ),
];

fn plural(n: u32, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// "T3 apartment", or "studio" when there are no bedrooms.
fn unit_type(input: &PropertyInput) -> String {
    match input.features.bedrooms {
        0 => "studio".to_string(),
        n => format!("T{n} apartment"),
    }
}

impl Phrasebook for English {
    fn title(&self, input: &PropertyInput) -> String {
        let unit = match input.features.bedrooms {
            0 => "Studio Apartment".to_string(),
            n => format!("T{n} Apartment"),
        };
        let action = if input.is_sale() { "for Sale" } else { "for Rent" };
        format!("{unit} {action} in {}", place(input))
    }

    fn meta_description(&self, input: &PropertyInput) -> String {
        let features = &input.features;
        let mut highlights = Vec::new();
        if features.has_balcony() {
            highlights.push("balcony");
        }
        if features.has_elevator() {
            highlights.push("elevator");
        }
        if features.has_parking() {
            highlights.push("parking");
        }
        highlights.truncate(2);

        let unit = match features.bedrooms {
            0 => "studio apartment".to_string(),
            n => format!("{n}-bedroom apartment"),
        };
        let with = if highlights.is_empty() {
            String::new()
        } else {
            format!(" with {}", highlights.join(" and "))
        };
        let located = match input.location.neighborhood.trim() {
            "" => String::new(),
            n => format!(", located in {n}"),
        };

        format!(
            "Spacious {unit} in {}{with}{located}. Ideal for families.",
            input.location.city
        )
    }

    fn h1(&self, input: &PropertyInput) -> String {
        let features = &input.features;
        let highlight = if features.has_balcony() {
            " with Balcony"
        } else if features.has_elevator() {
            " with Elevator Access"
        } else {
            ""
        };
        let unit = match features.bedrooms {
            0 => "Modern Studio".to_string(),
            n => format!("Modern T{n} Apartment"),
        };
        format!("{unit}{highlight} in {}", place(input))
    }

    fn description(&self, input: &PropertyInput) -> String {
        let features = &input.features;
        let floor = floor_label(features.floor, Language::En);

        let mut text = format!(
            "Located in the charming neighborhood of {}, this elegant {} offers {} sqm of bright \
             and spacious living",
            area_name(input),
            unit_type(input),
            format_area(features.area_sqm)
        );
        if let Some(floor) = &floor {
            text.push_str(&format!(" on the {floor}"));
        }
        if features.has_elevator() {
            let preposition = if floor.is_some() { "of" } else { "in" };
            text.push_str(&format!(
                " {preposition} a well-maintained building with elevator access"
            ));
        }
        text.push_str(". ");

        text.push_str(&format!(
            "The apartment features {} and {}",
            plural(features.bedrooms, "bedroom", "bedrooms"),
            plural(features.bathrooms, "bathroom", "bathrooms")
        ));
        let mut amenities = Vec::new();
        if features.has_balcony() {
            amenities.push("a private balcony perfect for relaxing");
        }
        if features.has_parking() {
            amenities.push("a parking space");
        }
        if !amenities.is_empty() {
            text.push_str(&format!(", as well as {}", join_natural(&amenities, "and")));
        }
        text.push_str(". ");

        match features.year_built {
            Some(year) => text.push_str(&format!("Built in {year}, it combines")),
            None => text.push_str("It combines"),
        }
        text.push_str(" modern amenities with timeless comfort. ");

        let action = if input.is_sale() { "sale" } else { "rental" };
        text.push_str(&format!(
            "With a {action} price of {}, this {} property is ideal for families or professionals \
             looking for a well-located home.",
            format_price(input.price, Language::En),
            input.location.city
        ));
        text
    }

    fn description_padding(&self, input: &PropertyInput) -> Vec<String> {
        vec![
            format!(
                "Don't miss this opportunity to live in one of {}'s most sought-after neighborhoods.",
                input.location.city
            ),
            format!(
                "Arrange a visit to discover everything {} has to offer.",
                area_name(input)
            ),
            "Contact us for floor plans, photos and further details.".to_string(),
        ]
    }

    fn key_features(&self, input: &PropertyInput) -> Vec<String> {
        let features = &input.features;
        let mut items = Vec::new();
        if features.area_sqm > 0.0 {
            items.push(format!("{} sqm of living space", format_area(features.area_sqm)));
        }
        if features.bedrooms > 0 && features.bathrooms > 0 {
            items.push(format!(
                "{} and {}",
                plural(features.bedrooms, "bedroom", "bedrooms"),
                plural(features.bathrooms, "bathroom", "bathrooms")
            ));
        }
        if features.has_balcony() {
            items.push("Private balcony".to_string());
        }
        if features.has_elevator() {
            items.push("Elevator access".to_string());
        }
        if features.has_parking() {
            items.push("Parking space".to_string());
        }
        items.push(format!("Located in {}", place(input)));
        items
    }

    fn known_neighborhood(&self, neighborhood: &str) -> Option<&'static str> {
        let key = neighborhood.to_lowercase();
        NEIGHBORHOODS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, text)| *text)
    }

    fn generic_neighborhood(&self, input: &PropertyInput) -> String {
        format!(
            "{} is a wonderful area of {}, offering residents a great quality of life with \
             excellent amenities, good transport connections and a strong sense of community. \
             The neighborhood provides easy access to schools, shops and recreational facilities.",
            area_name(input),
            input.location.city
        )
    }

    fn call_to_action(&self, input: &PropertyInput) -> String {
        if input.is_sale() {
            format!(
                "Don't miss this opportunity: schedule your viewing today and discover your new \
                 home in {}.",
                input.location.city
            )
        } else {
            format!(
                "Contact us today to arrange a viewing and secure your new rental home in {}.",
                input.location.city
            )
        }
    }
}
