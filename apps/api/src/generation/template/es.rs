use crate::generation::formatting::{floor_label, format_area, format_price, join_natural};
use crate::models::{Language, PropertyInput};

use super::{area_name, place, Phrasebook};

pub(crate) struct Spanish;

const NEIGHBORHOODS: &[(&str, &str)] = &[
    (
        "salamanca",
        "Salamanca es uno de los barrios más exclusivos de Madrid, conocido por sus boutiques de \
         lujo, restaurantes gourmet y arquitectura señorial.",
    ),
    (
        "malasaña",
        "Malasaña destaca por su ambiente alternativo, vida nocturna vibrante y una amplia oferta \
         cultural en el corazón de Madrid.",
    ),
    (
        "chamberí",
        "Chamberí combina tradición y modernidad con sus calles tranquilas, plazas acogedoras y \
         una gran oferta gastronómica.",
    ),
    (
        "campo de ourique",
        "Campo de Ourique es uno de los barrios más deseados de Lisboa, conocido por sus cafés \
         animados, parques verdes y excelentes colegios, con fácil acceso al centro de la ciudad.",
    ),
    (
        "chiado",
        "El Chiado es el corazón cultural de Lisboa, con elegantes calles comerciales, teatros \
         históricos y plazas con encanto.",
    ),
];

fn habitaciones(n: u32) -> String {
    if n == 1 {
        "1 habitación".to_string()
    } else {
        format!("{n} habitaciones")
    }
}

fn banos(n: u32) -> String {
    if n == 1 {
        "1 baño".to_string()
    } else {
        format!("{n} baños")
    }
}

/// "apartamento de 3 habitaciones", or "estudio" when there are no bedrooms.
fn unit_type(input: &PropertyInput) -> String {
    match input.features.bedrooms {
        0 => "estudio".to_string(),
        n => format!("apartamento de {}", habitaciones(n)),
    }
}

impl Phrasebook for Spanish {
    fn title(&self, input: &PropertyInput) -> String {
        let unit = match input.features.bedrooms {
            0 => "Estudio".to_string(),
            n => habitaciones(n),
        };
        let action = if input.is_sale() {
            "en Venta"
        } else {
            "en Alquiler"
        };
        format!("{unit} {action} en {}", place(input))
    }

    fn meta_description(&self, input: &PropertyInput) -> String {
        let features = &input.features;
        let mut highlights = Vec::new();
        if features.has_balcony() {
            highlights.push("balcón");
        }
        if features.has_elevator() {
            highlights.push("ascensor");
        }
        if features.has_parking() {
            highlights.push("aparcamiento");
        }
        highlights.truncate(2);

        let with = if highlights.is_empty() {
            String::new()
        } else {
            format!(" con {}", highlights.join(" y "))
        };
        let located = match input.location.neighborhood.trim() {
            "" => String::new(),
            n => format!(", ubicado en {n}"),
        };

        format!(
            "Amplio {} en {}{with}{located}. Ideal para familias.",
            unit_type(input),
            input.location.city
        )
    }

    fn h1(&self, input: &PropertyInput) -> String {
        let features = &input.features;
        let highlight = if features.has_balcony() {
            " con Balcón"
        } else if features.has_elevator() {
            " con Ascensor"
        } else {
            ""
        };
        let unit = match features.bedrooms {
            0 => "Estudio moderno".to_string(),
            n => format!("Apartamento moderno de {}", habitaciones(n)),
        };
        format!("{unit}{highlight} en {}", place(input))
    }

    fn description(&self, input: &PropertyInput) -> String {
        let features = &input.features;
        let floor = floor_label(features.floor, Language::Es);

        let mut text = format!(
            "Situado en el encantador barrio de {}, este elegante {} ofrece {} m² de espacio \
             luminoso y amplio",
            area_name(input),
            unit_type(input),
            format_area(features.area_sqm)
        );
        if let Some(floor) = &floor {
            text.push_str(&format!(" en la {floor}"));
        }
        if features.has_elevator() {
            let preposition = if floor.is_some() { "de un" } else { "en un" };
            text.push_str(&format!(
                " {preposition} edificio bien conservado con acceso por ascensor"
            ));
        }
        text.push_str(". ");

        text.push_str(&format!(
            "La vivienda cuenta con {} y {}",
            habitaciones(features.bedrooms),
            banos(features.bathrooms)
        ));
        let mut amenities = Vec::new();
        if features.has_balcony() {
            amenities.push("un balcón privado perfecto para relajarse");
        }
        if features.has_parking() {
            amenities.push("plaza de aparcamiento");
        }
        if !amenities.is_empty() {
            text.push_str(&format!(", además de {}", join_natural(&amenities, "y")));
        }
        text.push_str(". ");

        match features.year_built {
            Some(year) => text.push_str(&format!("Construido en {year}, combina")),
            None => text.push_str("Combina"),
        }
        text.push_str(" comodidades modernas con un confort atemporal. ");

        let action = if input.is_sale() { "venta" } else { "alquiler" };
        text.push_str(&format!(
            "Con un precio de {action} de {}, esta propiedad en {} es ideal para familias o \
             profesionales que buscan un hogar bien ubicado.",
            format_price(input.price, Language::Es),
            input.location.city
        ));
        text
    }

    fn description_padding(&self, input: &PropertyInput) -> Vec<String> {
        vec![
            format!(
                "No pierdas esta oportunidad de vivir en uno de los barrios más solicitados de {}.",
                input.location.city
            ),
            format!(
                "Concierta una visita y descubre todo lo que {} puede ofrecerte.",
                area_name(input)
            ),
            "Contáctanos para recibir planos, fotografías y más información.".to_string(),
        ]
    }

    fn key_features(&self, input: &PropertyInput) -> Vec<String> {
        let features = &input.features;
        let mut items = Vec::new();
        if features.area_sqm > 0.0 {
            items.push(format!(
                "{} m² de superficie habitable",
                format_area(features.area_sqm)
            ));
        }
        if features.bedrooms > 0 && features.bathrooms > 0 {
            items.push(format!(
                "{} y {}",
                habitaciones(features.bedrooms),
                banos(features.bathrooms)
            ));
        }
        if features.has_balcony() {
            items.push("Balcón privado".to_string());
        }
        if features.has_elevator() {
            items.push("Acceso por ascensor".to_string());
        }
        if features.has_parking() {
            items.push("Plaza de aparcamiento".to_string());
        }
        items.push(format!("Ubicado en {}", place(input)));
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
            "{} es una zona excelente de {}, que ofrece una alta calidad de vida con buenas \
             conexiones de transporte, servicios cercanos y un ambiente acogedor.",
            area_name(input),
            input.location.city
        )
    }

    fn call_to_action(&self, input: &PropertyInput) -> String {
        if input.is_sale() {
            format!(
                "No dejes pasar esta oportunidad: agenda tu visita y descubre tu nuevo hogar en {}.",
                input.location.city
            )
        } else {
            format!(
                "Contáctanos hoy para concertar una visita y asegurar tu nuevo hogar en alquiler \
                 en {}.",
                input.location.city
            )
        }
    }
}
