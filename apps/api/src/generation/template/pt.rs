use crate::generation::formatting::{floor_label, format_area, format_price, join_natural};
use crate::models::{Language, PropertyInput};

use super::{area_name, place, Phrasebook};

pub(crate) struct Portuguese;

const NEIGHBORHOODS: &[(&str, &str)] = &[
    (
        "campo de ourique",
        "Campo de Ourique é um dos bairros mais desejados de Lisboa, conhecido pelos seus cafés \
         vibrantes, parques verdes e excelentes escolas. Com uma forte comunidade local e fácil \
         acesso ao centro da cidade, oferece a combinação perfeita entre charme e conveniência.",
    ),
    (
        "chiado",
        "O Chiado é o coração cultural de Lisboa, com elegantes ruas comerciais, teatros \
         históricos e praças encantadoras. Este bairro sofisticado oferece fácil acesso aos \
         melhores restaurantes e atrações culturais da cidade.",
    ),
    (
        "príncipe real",
        "O Príncipe Real é um bairro sofisticado conhecido pelos seus belos jardins, lojas de \
         antiguidades e boutiques modernas. É perfeito para quem aprecia uma vida refinada no \
         coração da cidade.",
    ),
    (
        "principe real",
        "O Príncipe Real é um bairro sofisticado conhecido pelos seus belos jardins, lojas de \
         antiguidades e boutiques modernas. É perfeito para quem aprecia uma vida refinada no \
         coração da cidade.",
    ),
];

fn quartos(n: u32) -> String {
    if n == 1 {
        "1 quarto".to_string()
    } else {
        format!("{n} quartos")
    }
}

fn casas_de_banho(n: u32) -> String {
    if n == 1 {
        "1 casa de banho".to_string()
    } else {
        format!("{n} casas de banho")
    }
}

impl Phrasebook for Portuguese {
    fn title(&self, input: &PropertyInput) -> String {
        let action = if input.is_sale() {
            "para Venda"
        } else {
            "para Arrendar"
        };
        format!("T{} {action} em {}", input.features.bedrooms, place(input))
    }

    fn meta_description(&self, input: &PropertyInput) -> String {
        let features = &input.features;
        let mut highlights = Vec::new();
        if features.has_balcony() {
            highlights.push("varanda");
        }
        if features.has_elevator() {
            highlights.push("elevador");
        }
        if features.has_parking() {
            highlights.push("estacionamento");
        }
        highlights.truncate(2);

        let with = if highlights.is_empty() {
            String::new()
        } else {
            format!(" com {}", highlights.join(" e "))
        };
        let located = match input.location.neighborhood.trim() {
            "" => String::new(),
            n => format!(", localizado em {n}"),
        };

        format!(
            "Apartamento T{} espaçoso em {}{with}{located}. Ideal para famílias.",
            features.bedrooms, input.location.city
        )
    }

    fn h1(&self, input: &PropertyInput) -> String {
        let features = &input.features;
        let highlight = if features.has_balcony() {
            " com Varanda"
        } else if features.has_elevator() {
            " com Elevador"
        } else {
            ""
        };
        format!(
            "Apartamento T{} Moderno{highlight} em {}",
            features.bedrooms,
            place(input)
        )
    }

    fn description(&self, input: &PropertyInput) -> String {
        let features = &input.features;
        let floor = floor_label(features.floor, Language::Pt);

        let mut text = format!(
            "Localizado no encantador bairro de {}, este elegante apartamento T{} oferece {} m² \
             de espaço luminoso e amplo",
            area_name(input),
            features.bedrooms,
            format_area(features.area_sqm)
        );
        if let Some(floor) = &floor {
            text.push_str(&format!(" no {floor}"));
        }
        if features.has_elevator() {
            let preposition = if floor.is_some() { "de um" } else { "num" };
            text.push_str(&format!(
                " {preposition} edifício bem conservado com acesso por elevador"
            ));
        }
        text.push_str(". ");

        text.push_str(&format!(
            "O apartamento possui {} e {}",
            quartos(features.bedrooms),
            casas_de_banho(features.bathrooms)
        ));
        let mut amenities = Vec::new();
        if features.has_balcony() {
            amenities.push("uma varanda privativa perfeita para relaxar");
        }
        if features.has_parking() {
            amenities.push("lugar de estacionamento");
        }
        if !amenities.is_empty() {
            text.push_str(&format!(", bem como {}", join_natural(&amenities, "e")));
        }
        text.push_str(". ");

        match features.year_built {
            Some(year) => text.push_str(&format!("Construído em {year}, combina")),
            None => text.push_str("Combina"),
        }
        text.push_str(" comodidades modernas com conforto intemporal. ");

        let action = if input.is_sale() {
            "venda"
        } else {
            "arrendamento"
        };
        text.push_str(&format!(
            "Com um preço de {action} de {}, este imóvel em {} é ideal para famílias ou \
             profissionais que procuram uma casa bem localizada.",
            format_price(input.price, Language::Pt),
            input.location.city
        ));
        text
    }

    fn description_padding(&self, input: &PropertyInput) -> Vec<String> {
        vec![
            format!(
                "Não perca esta oportunidade de viver num dos bairros mais procurados de {}.",
                input.location.city
            ),
            format!(
                "Agende uma visita e descubra tudo o que {} tem para oferecer.",
                area_name(input)
            ),
            "Contacte-nos para receber plantas, fotografias e mais informações.".to_string(),
        ]
    }

    fn key_features(&self, input: &PropertyInput) -> Vec<String> {
        let features = &input.features;
        let mut items = Vec::new();
        if features.area_sqm > 0.0 {
            items.push(format!(
                "{} m² de área habitacional",
                format_area(features.area_sqm)
            ));
        }
        if features.bedrooms > 0 && features.bathrooms > 0 {
            items.push(format!(
                "{} e {}",
                quartos(features.bedrooms),
                casas_de_banho(features.bathrooms)
            ));
        }
        if features.has_balcony() {
            items.push("Varanda privativa".to_string());
        }
        if features.has_elevator() {
            items.push("Acesso por elevador".to_string());
        }
        if features.has_parking() {
            items.push("Lugar de estacionamento".to_string());
        }
        items.push(format!("Localizado em {}", place(input)));
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
            "{} é uma área maravilhosa de {}, oferecendo aos residentes uma excelente qualidade \
             de vida com ótimas comodidades, boas ligações de transporte e um forte sentido de \
             comunidade. O bairro proporciona fácil acesso a escolas, lojas e instalações \
             recreativas.",
            area_name(input),
            input.location.city
        )
    }

    fn call_to_action(&self, input: &PropertyInput) -> String {
        if input.is_sale() {
            format!(
                "Não perca esta oportunidade: agende já a sua visita e descubra o seu novo lar \
                 em {}.",
                input.location.city
            )
        } else {
            format!(
                "Contacte-nos hoje para marcar uma visita e garantir o seu novo lar de \
                 arrendamento em {}.",
                input.location.city
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::fixtures::{lisbon_sale, minimal};

    #[test]
    fn test_title_uses_t_notation() {
        assert_eq!(
            Portuguese.title(&lisbon_sale(Language::Pt)),
            "T3 para Venda em Campo de Ourique, Lisbon"
        );
    }

    #[test]
    fn test_description_price_uses_dot_separator() {
        let text = Portuguese.description(&lisbon_sale(Language::Pt));
        assert!(text.contains("€650.000"));
        assert!(text.contains("no 2º andar de um edifício bem conservado"));
        assert!(text.contains("3 quartos e 2 casas de banho"));
    }

    #[test]
    fn test_singular_rooms() {
        let text = Portuguese.description(&minimal(Language::Pt));
        assert!(text.contains("1 quarto e 1 casa de banho."));
        assert!(text.contains("preço de arrendamento"));
    }
}
