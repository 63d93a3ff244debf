// Prompt templates for the remote generators, one per (section, language).
// Shared by every backend; transports only differ in how they ship the text.
//
// Placeholders: {bedrooms} {bathrooms} {area} {neighborhood} {city} {floor}
// {year_built} {balcony} {elevator} {parking} {highlights} {price} {listing}

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::generation::formatting::{format_area, format_price};
use crate::generation::generator::Section;
use crate::models::{Language, PropertyInput};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("valid placeholder regex"));

// ── English ─────────────────────────────────────────────────────────────────

const EN_TITLE: &str = r#"Generate an SEO-optimized title (maximum 60 characters) for a real estate listing with the following data:
- Type: {bedrooms}-bedroom apartment
- Location: {neighborhood}, {city}
- Listing type: {listing}

The title should:
- Include keywords like "apartment", "{city}", "{neighborhood}"
- Be attractive and clear
- Have maximum 60 characters
- Be in English

Respond only with the title, no explanations."#;

const EN_META: &str = r#"Generate an SEO meta description (maximum 155 characters) for a real estate listing:
- {bedrooms}-bedroom apartment in {city}
- Location: {neighborhood}
- Features: {highlights}
- Area: {area} sqm

The description should:
- Be attractive for search engines
- Include "{bedrooms}-bedroom apartment", "{city}", "{neighborhood}"
- Have maximum 155 characters
- End with something like "Ideal for families"
- Be in English

Respond only with the meta description, no explanations."#;

const EN_H1: &str = "Create an attractive H1 headline (different from the SEO title) for a {bedrooms}-bedroom apartment in {neighborhood}, {city}. It should be catchy and include a special feature if available ({highlights}). Maximum 80 characters. Respond only with the headline.";

const EN_DESCRIPTION: &str = r#"Write a complete and attractive description (500-700 characters) for an apartment:

PROPERTY DATA:
- Type: {bedrooms}-bedroom apartment
- Location: {neighborhood}, {city}
- Area: {area} sqm
- Bedrooms: {bedrooms}
- Bathrooms: {bathrooms}
- Floor: {floor}
- Year built: {year_built}
- Balcony: {balcony}
- Elevator: {elevator}
- Parking: {parking}
- Price: {price}
- Type: {listing}

The description should:
- Be engaging and persuasive
- Include SEO keywords naturally: "{bedrooms}-bedroom apartment", "{city}", "{neighborhood}", "real estate in Portugal"
- Mention the most attractive features
- Be between 500-700 characters
- End with a sentence about the location or opportunity
- Be in English

Respond only with the description, no explanations."#;

const EN_KEY_FEATURES: &str = r#"List 4-5 key features in bullet point format for:
- {bedrooms}-bedroom apartment in {neighborhood}, {city}
- Area: {area} sqm
- Features: balcony={balcony}, elevator={elevator}, parking={parking}

Format: each line should start with "•" and be concise. Respond only with the list."#;

const EN_NEIGHBORHOOD: &str = r#"Write an attractive description of the {neighborhood} neighborhood in {city} (approximately 200-300 characters):

The description should:
- Highlight unique characteristics of the neighborhood
- Mention amenities, transport, or nearby attractions
- Be attractive to potential buyers/renters
- Include "{neighborhood}" and "{city}" naturally
- Be in English

If you don't know specific details about the neighborhood, create a generic but attractive description of the area.

Respond only with the description, no explanations."#;

const EN_CTA: &str = r#"Write a persuasive call-to-action for a real estate listing in {city}:

Listing type: {listing}

The call-to-action should:
- Be urgent and persuasive
- Encourage contact or viewing
- Mention "{city}"
- Be approximately 50-80 characters
- Be in English

Respond only with the call-to-action, no explanations."#;

// ── Portuguese ──────────────────────────────────────────────────────────────

const PT_TITLE: &str = r#"Gera um título SEO optimizado (máximo 60 caracteres) para um anúncio imobiliário com os seguintes dados:
- Tipo: T{bedrooms} apartamento
- Localização: {neighborhood}, {city}
- Tipo de anúncio: {listing}

O título deve:
- Incluir keywords como "T{bedrooms}", "{city}", "{neighborhood}"
- Ser atrativo e claro
- Ter máximo 60 caracteres
- Ser em português de Portugal

Responde apenas com o título, sem explicações."#;

const PT_META: &str = r#"Gera uma meta descrição SEO (máximo 155 caracteres) para um anúncio imobiliário:
- Apartamento T{bedrooms} em {city}
- Localização: {neighborhood}
- Características: {highlights}
- Área: {area} m²

A descrição deve:
- Ser atrativa para motores de busca
- Incluir "apartamento T{bedrooms}", "{city}", "{neighborhood}"
- Ter máximo 155 caracteres
- Terminar com algo como "Ideal para famílias"
- Ser em português de Portugal

Responde apenas com a meta descrição, sem explicações."#;

const PT_H1: &str = "Cria um título H1 atrativo (diferente do título SEO) para um apartamento T{bedrooms} em {neighborhood}, {city}. Deve ser cativante e incluir uma característica especial se disponível ({highlights}). Máximo 80 caracteres. Responde apenas com o título.";

const PT_DESCRIPTION: &str = r#"Escreve uma descrição completa e atrativa (500-700 caracteres) para um apartamento:

DADOS DO IMÓVEL:
- Tipo: T{bedrooms} apartamento
- Localização: {neighborhood}, {city}
- Área: {area} m²
- Quartos: {bedrooms}
- Casas de banho: {bathrooms}
- Andar: {floor}
- Ano de construção: {year_built}
- Varanda: {balcony}
- Elevador: {elevator}
- Estacionamento: {parking}
- Preço: {price}
- Tipo: {listing}

A descrição deve:
- Ser envolvente e persuasiva
- Incluir keywords SEO naturalmente: "apartamento T{bedrooms}", "{city}", "{neighborhood}", "imobiliário em Portugal"
- Mencionar as características mais atrativas
- Ter entre 500-700 caracteres
- Terminar com uma frase sobre a localização ou oportunidade
- Ser em português de Portugal

Responde apenas com a descrição, sem explicações."#;

const PT_KEY_FEATURES: &str = r#"Lista 4-5 características principais em formato de bullet points para:
- Apartamento T{bedrooms} em {neighborhood}, {city}
- Área: {area} m²
- Características: varanda={balcony}, elevador={elevator}, estacionamento={parking}

Formato: cada linha deve começar com "•" e ser concisa. Responde apenas com a lista."#;

const PT_NEIGHBORHOOD: &str = r#"Escreve uma descrição atrativa do bairro {neighborhood} em {city} (aproximadamente 200-300 caracteres):

A descrição deve:
- Destacar as características únicas do bairro
- Mencionar comodidades, transporte, ou atrações próximas
- Ser atrativa para potenciais compradores/inquilinos
- Incluir "{neighborhood}" e "{city}" naturalmente
- Ser em português de Portugal

Se não conheceres detalhes específicos do bairro, cria uma descrição genérica mas atrativa sobre a zona.

Responde apenas com a descrição, sem explicações."#;

const PT_CTA: &str = r#"Escreve uma chamada para ação (call-to-action) persuasiva para um anúncio imobiliário em {city}:

Tipo de anúncio: {listing}

A chamada deve:
- Ser urgente e persuasiva
- Incentivar o contacto ou visita
- Mencionar "{city}"
- Ter aproximadamente 50-80 caracteres
- Ser em português de Portugal

Responde apenas com a chamada para ação, sem explicações."#;

// ── Spanish ─────────────────────────────────────────────────────────────────

const ES_TITLE: &str = r#"Genera un título SEO optimizado (máximo 60 caracteres) para un anuncio inmobiliario con los siguientes datos:
- Tipo: apartamento de {bedrooms} habitaciones
- Ubicación: {neighborhood}, {city}
- Tipo de anuncio: {listing}

El título debe:
- Incluir palabras clave como "{bedrooms} habitaciones", "{city}", "{neighborhood}"
- Ser atractivo y claro
- Tener máximo 60 caracteres
- Estar en español

Responde solo con el título, sin explicaciones."#;

const ES_META: &str = r#"Genera una meta descripción SEO (máximo 155 caracteres) para un anuncio inmobiliario:
- Apartamento de {bedrooms} habitaciones en {city}
- Ubicación: {neighborhood}
- Características: {highlights}
- Superficie: {area} m²

La descripción debe:
- Ser atractiva para buscadores
- Incluir "apartamento de {bedrooms} habitaciones", "{city}", "{neighborhood}"
- Tener máximo 155 caracteres
- Terminar con algo como "Ideal para familias"
- Estar en español

Responde solo con la meta descripción, sin explicaciones."#;

const ES_H1: &str = "Crea un título H1 atractivo (diferente del título SEO) para un apartamento de {bedrooms} habitaciones en {neighborhood}, {city}. Debe ser cautivador e incluir una característica especial si está disponible ({highlights}). Máximo 80 caracteres. Responde solo con el título.";

const ES_DESCRIPTION: &str = r#"Escribe una descripción completa y atractiva (500-700 caracteres) para un apartamento:

DATOS DE LA PROPIEDAD:
- Tipo: apartamento de {bedrooms} habitaciones
- Ubicación: {neighborhood}, {city}
- Superficie: {area} m²
- Habitaciones: {bedrooms}
- Baños: {bathrooms}
- Planta: {floor}
- Año de construcción: {year_built}
- Balcón: {balcony}
- Ascensor: {elevator}
- Aparcamiento: {parking}
- Precio: {price}
- Tipo: {listing}

La descripción debe:
- Ser envolvente y persuasiva
- Incluir palabras clave SEO naturalmente: "apartamento de {bedrooms} habitaciones", "{city}", "{neighborhood}", "inmobiliaria en España"
- Mencionar las características más atractivas
- Tener entre 500-700 caracteres
- Terminar con una frase sobre la ubicación u oportunidad
- Estar en español

Responde solo con la descripción, sin explicaciones."#;

const ES_KEY_FEATURES: &str = r#"Lista 4-5 características clave en formato de viñetas para:
- Apartamento de {bedrooms} habitaciones en {neighborhood}, {city}
- Superficie: {area} m²
- Características: balcón={balcony}, ascensor={elevator}, aparcamiento={parking}

Formato: cada línea debe comenzar con "•" y ser concisa. Responde solo con la lista."#;

const ES_NEIGHBORHOOD: &str = r#"Escribe una descripción atractiva del barrio {neighborhood} en {city} (aproximadamente 200-300 caracteres):

La descripción debe:
- Resaltar las características únicas del barrio
- Mencionar servicios, transporte o atracciones cercanas
- Ser atractiva para compradores o inquilinos potenciales
- Incluir "{neighborhood}" y "{city}" naturalmente
- Estar en español

Si no conoces detalles específicos del barrio, crea una descripción genérica pero atractiva sobre la zona.

Responde solo con la descripción, sin explicaciones."#;

const ES_CTA: &str = r#"Escribe una llamada a la acción (call-to-action) persuasiva para un anuncio inmobiliario en {city}:

Tipo de anuncio: {listing}

La llamada debe:
- Ser urgente y persuasiva
- Invitar a contactar o visitar
- Mencionar "{city}"
- Tener aproximadamente 50-80 caracteres
- Estar en español

Responde solo con la llamada a la acción, sin explicaciones."#;

fn template(section: Section, language: Language) -> &'static str {
    match (language, section) {
        (Language::En, Section::Title) => EN_TITLE,
        (Language::En, Section::MetaDescription) => EN_META,
        (Language::En, Section::H1) => EN_H1,
        (Language::En, Section::Description) => EN_DESCRIPTION,
        (Language::En, Section::KeyFeatures) => EN_KEY_FEATURES,
        (Language::En, Section::Neighborhood) => EN_NEIGHBORHOOD,
        (Language::En, Section::CallToAction) => EN_CTA,
        (Language::Pt, Section::Title) => PT_TITLE,
        (Language::Pt, Section::MetaDescription) => PT_META,
        (Language::Pt, Section::H1) => PT_H1,
        (Language::Pt, Section::Description) => PT_DESCRIPTION,
        (Language::Pt, Section::KeyFeatures) => PT_KEY_FEATURES,
        (Language::Pt, Section::Neighborhood) => PT_NEIGHBORHOOD,
        (Language::Pt, Section::CallToAction) => PT_CTA,
        (Language::Es, Section::Title) => ES_TITLE,
        (Language::Es, Section::MetaDescription) => ES_META,
        (Language::Es, Section::H1) => ES_H1,
        (Language::Es, Section::Description) => ES_DESCRIPTION,
        (Language::Es, Section::KeyFeatures) => ES_KEY_FEATURES,
        (Language::Es, Section::Neighborhood) => ES_NEIGHBORHOOD,
        (Language::Es, Section::CallToAction) => ES_CTA,
    }
}

/// Token cap sent with each section's request.
pub fn max_tokens(section: Section) -> u32 {
    match section {
        Section::Title => 50,
        Section::MetaDescription => 100,
        Section::H1 => 60,
        Section::Description => 300,
        Section::KeyFeatures => 150,
        Section::Neighborhood => 200,
        Section::CallToAction => 50,
    }
}

struct Vocabulary {
    yes: &'static str,
    no: &'static str,
    unknown: &'static str,
    sale: &'static str,
    rent: &'static str,
    balcony: &'static str,
    elevator: &'static str,
    parking: &'static str,
    no_highlights: &'static str,
}

fn vocabulary(language: Language) -> Vocabulary {
    match language {
        Language::En => Vocabulary {
            yes: "yes",
            no: "no",
            unknown: "N/A",
            sale: "sale",
            rent: "rent",
            balcony: "balcony",
            elevator: "elevator",
            parking: "parking",
            no_highlights: "spacious apartment",
        },
        Language::Pt => Vocabulary {
            yes: "sim",
            no: "não",
            unknown: "N/A",
            sale: "venda",
            rent: "arrendamento",
            balcony: "varanda",
            elevator: "elevador",
            parking: "estacionamento",
            no_highlights: "apartamento espaçoso",
        },
        Language::Es => Vocabulary {
            yes: "sí",
            no: "no",
            unknown: "N/A",
            sale: "venta",
            rent: "alquiler",
            balcony: "balcón",
            elevator: "ascensor",
            parking: "aparcamiento",
            no_highlights: "apartamento espacioso",
        },
    }
}

/// Builds the instruction for one section in the listing's language.
pub fn build_prompt(section: Section, input: &PropertyInput) -> String {
    let language = input.language;
    let words = vocabulary(language);
    let features = &input.features;
    let yes_no = |flag: bool| if flag { words.yes } else { words.no };

    let mut highlights = Vec::new();
    if features.has_balcony() {
        highlights.push(words.balcony);
    }
    if features.has_elevator() {
        highlights.push(words.elevator);
    }
    if features.has_parking() {
        highlights.push(words.parking);
    }
    let highlights = if highlights.is_empty() {
        words.no_highlights.to_string()
    } else {
        highlights.join(", ")
    };

    let floor = features
        .floor
        .map(|f| f.to_string())
        .unwrap_or_else(|| words.unknown.to_string());
    let year_built = features
        .year_built
        .map(|y| y.to_string())
        .unwrap_or_else(|| words.unknown.to_string());

    let bedrooms = features.bedrooms.to_string();
    let bathrooms = features.bathrooms.to_string();
    let area = format_area(features.area_sqm);
    let price = format_price(input.price, language);
    let values: [(&str, &str); 13] = [
        ("bedrooms", bedrooms.as_str()),
        ("bathrooms", bathrooms.as_str()),
        ("area", area.as_str()),
        ("neighborhood", input.location.neighborhood.as_str()),
        ("city", input.location.city.as_str()),
        ("floor", floor.as_str()),
        ("year_built", year_built.as_str()),
        ("balcony", yes_no(features.has_balcony())),
        ("elevator", yes_no(features.has_elevator())),
        ("parking", yes_no(features.has_parking())),
        ("highlights", highlights.as_str()),
        ("price", price.as_str()),
        ("listing", if input.is_sale() { words.sale } else { words.rent }),
    ];
    fill(template(section, language), &values)
}

/// Substitutes every `{key}` in one pass. Inserted values are never rescanned,
/// so braces typed into a listing reach the model verbatim.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::fixtures::{lisbon_sale, minimal};

    #[test]
    fn test_every_prompt_is_fully_substituted() {
        for language in [Language::En, Language::Pt, Language::Es] {
            for section in Section::ORDER {
                let prompt = build_prompt(section, &lisbon_sale(language));
                assert!(
                    !prompt.contains('{') && !prompt.contains('}'),
                    "{language:?}/{section:?} left a placeholder: {prompt}"
                );
                assert!(prompt.contains("Lisbon"), "{language:?}/{section:?}");
            }
        }
    }

    #[test]
    fn test_description_prompt_embeds_property_data() {
        let prompt = build_prompt(Section::Description, &lisbon_sale(Language::En));
        assert!(prompt.contains("- Area: 120 sqm"));
        assert!(prompt.contains("- Floor: 2"));
        assert!(prompt.contains("- Balcony: yes"));
        assert!(prompt.contains("- Parking: no"));
        assert!(prompt.contains("- Price: €650,000"));
        assert!(prompt.contains("500-700 characters"));
    }

    #[test]
    fn test_missing_optionals_render_as_not_available() {
        let prompt = build_prompt(Section::Description, &minimal(Language::Pt));
        assert!(prompt.contains("- Andar: N/A"));
        assert!(prompt.contains("- Ano de construção: N/A"));
        assert!(prompt.contains("- Tipo: arrendamento"));
    }

    #[test]
    fn test_meta_prompt_lists_highlights_or_fallback() {
        let with = build_prompt(Section::MetaDescription, &lisbon_sale(Language::Es));
        assert!(with.contains("Características: balcón, ascensor"));
        let without = build_prompt(Section::MetaDescription, &minimal(Language::En));
        assert!(without.contains("Features: spacious apartment"));
    }

    #[test]
    fn test_key_features_prompt_requests_bullets() {
        for language in [Language::En, Language::Pt, Language::Es] {
            assert!(build_prompt(Section::KeyFeatures, &lisbon_sale(language)).contains('•'));
        }
    }

    #[test]
    fn test_braces_in_listing_text_are_not_expanded() {
        let mut input = lisbon_sale(Language::En);
        input.location.neighborhood = "Bairro {city} {price}".to_string();
        let prompt = build_prompt(Section::Neighborhood, &input);
        assert!(prompt.contains("Bairro {city} {price} neighborhood in Lisbon"));
    }

    #[test]
    fn test_fill_keeps_unknown_placeholders() {
        assert_eq!(fill("{city} / {unknown}", &[("city", "Porto")]), "Porto / {unknown}");
    }

    #[test]
    fn test_token_caps() {
        assert_eq!(max_tokens(Section::Title), 50);
        assert_eq!(max_tokens(Section::Description), 300);
    }
}
