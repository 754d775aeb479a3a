//! The product entry.
//!
//! A [`Product`] is an `atom:entry` carrying `sc` and `scp` fields. Most fields
//! are plain text bound to one tag; the rest are repeated groups (shipping and
//! tax rules), attribute-bearing values (prices and weight with a `unit`),
//! destinations under `app:control` and name-addressed generic attributes.

use contentstack_atom::{AtomElement, NodeId, Tag};

use crate::common;
use crate::model::{AtomModel, EntryModel};

/// One shipping rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shipping {
    /// Destination country, e.g. `US`.
    pub country: String,
    /// Region within the country, e.g. `CA`.
    pub region: String,
    /// Shipping price.
    pub price: String,
    /// Currency of the price, e.g. `usd`.
    pub price_unit: String,
    /// Service name, e.g. `UPS Ground`.
    pub service: String,
}

/// One tax rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tax {
    /// Country the rule applies to.
    pub country: String,
    /// Region within the country.
    pub region: String,
    /// Tax rate in percent.
    pub rate: String,
    /// Whether shipping is taxed, `true` or `false`.
    pub ship: String,
}

/// A name-addressed `sc:attribute`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenericAttribute {
    /// The `name` attribute.
    pub name: String,
    /// Text content.
    pub value: String,
    /// The optional `type` attribute, e.g. `int` or `text`.
    pub attribute_type: Option<String>,
    /// The optional `unit` attribute.
    pub unit: Option<String>,
}

impl GenericAttribute {
    /// An untyped, unitless attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

/// A named `sc:group` of generic attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    /// The `name` attribute.
    pub name: String,
    /// Member attributes in document order.
    pub attributes: Vec<GenericAttribute>,
}

/// A product entry.
#[derive(Debug, Clone)]
pub struct Product {
    element: AtomElement,
}

impl_atom_model!(Product, Entry, [Atom, App, Sc, Scp, Batch]);

impl EntryModel for Product {}

impl Product {
    text_fields! {
        Id => sku, set_sku;
        TargetCountry => target_country, set_target_country;
        ContentLanguage => content_language, set_content_language;
        Condition => condition, set_condition;
        ExpirationDate => expiration_date, set_expiration_date;
        Adult => adult, set_adult;
        ImageLink => image_link, set_image_link;
        AdwordsGrouping => adwords_grouping, set_adwords_grouping;
        AdwordsLabels => adwords_labels, set_adwords_labels;
        AdwordsQueryparam => adwords_queryparam, set_adwords_queryparam;
        AdwordsRedirect => adwords_redirect, set_adwords_redirect;
        Author => author, set_author;
        Availability => availability, set_availability;
        Brand => brand, set_brand;
        Color => color, set_color;
        Edition => edition, set_edition;
        FeaturedProduct => featured_product, set_featured_product;
        Genre => genre, set_genre;
        Manufacturer => manufacturer, set_manufacturer;
        Mpn => mpn, set_mpn;
        OnlineOnly => online_only, set_online_only;
        Gtin => gtin, set_gtin;
        ProductType => product_type, set_product_type;
        ProductReviewAverage => product_review_average, set_product_review_average;
        ProductReviewCount => product_review_count, set_product_review_count;
        Quantity => quantity, set_quantity;
        Year => year, set_year;
        Channel => channel, set_channel;
        Gender => gender, set_gender;
        AgeGroup => age_group, set_age_group;
        ItemGroupId => item_group_id, set_item_group_id;
        GoogleProductCategory => google_product_category, set_google_product_category;
        Material => material, set_material;
        Pattern => pattern, set_pattern;
        SalePriceEffectiveDate => sale_price_effective_date, set_sale_price_effective_date;
    }

    // -----------------------------------------------------------------------
    // Values with units
    // -----------------------------------------------------------------------

    /// The price.
    #[must_use]
    pub fn price(&self) -> String {
        self.element.first_value(Tag::Price)
    }

    /// Currency of the price, or `""` when there is no price.
    #[must_use]
    pub fn price_unit(&self) -> String {
        self.element.first_attribute(Tag::Price, "unit")
    }

    /// Set the price and its currency.
    pub fn set_price(&mut self, price: &str, unit: &str) {
        self.set_with_unit(Tag::Price, price, unit);
    }

    /// The sale price.
    #[must_use]
    pub fn sale_price(&self) -> String {
        self.element.first_value(Tag::SalePrice)
    }

    /// Currency of the sale price.
    #[must_use]
    pub fn sale_price_unit(&self) -> String {
        self.element.first_attribute(Tag::SalePrice, "unit")
    }

    /// Set the sale price and its currency.
    pub fn set_sale_price(&mut self, price: &str, unit: &str) {
        self.set_with_unit(Tag::SalePrice, price, unit);
    }

    /// The shipping weight.
    #[must_use]
    pub fn shipping_weight(&self) -> String {
        self.element.first_value(Tag::ShippingWeight)
    }

    /// Unit of the shipping weight, e.g. `lb`.
    #[must_use]
    pub fn shipping_weight_unit(&self) -> String {
        self.element.first_attribute(Tag::ShippingWeight, "unit")
    }

    /// Set the shipping weight and its unit.
    pub fn set_shipping_weight(&mut self, weight: &str, unit: &str) {
        self.set_with_unit(Tag::ShippingWeight, weight, unit);
    }

    fn set_with_unit(&self, tag: Tag, value: &str, unit: &str) {
        let node = self.element.set_first_value(tag, value);
        self.element.set_attribute(node, "unit", unit);
    }

    // -----------------------------------------------------------------------
    // Content and links
    // -----------------------------------------------------------------------

    /// The plain-text description.
    #[must_use]
    pub fn description(&self) -> String {
        common::description(&self.element)
    }

    /// Set the description as `atom:content` of type `text`.
    pub fn set_description(&mut self, description: &str) {
        common::set_description(&self.element, description);
    }

    /// The product landing page, from the alternate link.
    #[must_use]
    pub fn product_link(&self) -> String {
        common::alternate_link(&self.element)
    }

    /// Set the product landing page.
    pub fn set_product_link(&mut self, link: &str) {
        common::set_alternate_link(&self.element, link);
    }

    // -----------------------------------------------------------------------
    // Repeated groups
    // -----------------------------------------------------------------------

    /// Append a new shipping rule. Existing rules are left alone.
    pub fn add_shipping(&mut self, rule: &Shipping) -> NodeId {
        let el = &self.element;
        let group = el.create(Tag::Shipping, None);
        el.set_first_value_in(group, Tag::ShippingCountry, &rule.country);
        el.set_first_value_in(group, Tag::ShippingRegion, &rule.region);
        let price = el.set_first_value_in(group, Tag::ShippingPrice, &rule.price);
        el.set_attribute(price, "unit", &rule.price_unit);
        el.set_first_value_in(group, Tag::ShippingService, &rule.service);
        el.append_to_model(group);
        group
    }

    /// Every shipping rule in document order.
    #[must_use]
    pub fn shippings(&self) -> Vec<Shipping> {
        let el = &self.element;
        el.all(Tag::Shipping)
            .into_iter()
            .map(|group| {
                let price_unit = el
                    .first_in(group, Tag::ShippingPrice)
                    .map(|price| el.attribute(price, "unit"))
                    .unwrap_or_default();
                Shipping {
                    country: el.first_value_in(group, Tag::ShippingCountry),
                    region: el.first_value_in(group, Tag::ShippingRegion),
                    price: el.first_value_in(group, Tag::ShippingPrice),
                    price_unit,
                    service: el.first_value_in(group, Tag::ShippingService),
                }
            })
            .collect()
    }

    /// Remove every shipping rule.
    pub fn clear_all_shippings(&mut self) {
        self.element.delete_all(Tag::Shipping);
    }

    /// Append a new tax rule.
    pub fn add_tax(&mut self, rule: &Tax) -> NodeId {
        let el = &self.element;
        let group = el.create(Tag::Tax, None);
        el.set_first_value_in(group, Tag::TaxCountry, &rule.country);
        el.set_first_value_in(group, Tag::TaxRegion, &rule.region);
        el.set_first_value_in(group, Tag::TaxRate, &rule.rate);
        el.set_first_value_in(group, Tag::TaxShip, &rule.ship);
        el.append_to_model(group);
        group
    }

    /// Every tax rule in document order.
    #[must_use]
    pub fn taxes(&self) -> Vec<Tax> {
        let el = &self.element;
        el.all(Tag::Tax)
            .into_iter()
            .map(|group| Tax {
                country: el.first_value_in(group, Tag::TaxCountry),
                region: el.first_value_in(group, Tag::TaxRegion),
                rate: el.first_value_in(group, Tag::TaxRate),
                ship: el.first_value_in(group, Tag::TaxShip),
            })
            .collect()
    }

    /// Remove every tax rule.
    pub fn clear_all_taxes(&mut self) {
        self.element.delete_all(Tag::Tax);
    }

    /// Append a feature bullet.
    pub fn add_feature(&mut self, feature: &str) -> NodeId {
        self.append_value(Tag::Feature, feature)
    }

    /// Every feature bullet.
    #[must_use]
    pub fn features(&self) -> Vec<String> {
        self.values(Tag::Feature)
    }

    /// Remove every feature bullet.
    pub fn clear_all_features(&mut self) {
        self.element.delete_all(Tag::Feature);
    }

    /// Append an available size.
    pub fn add_size(&mut self, size: &str) -> NodeId {
        self.append_value(Tag::Size, size)
    }

    /// Every available size.
    #[must_use]
    pub fn sizes(&self) -> Vec<String> {
        self.values(Tag::Size)
    }

    /// Remove every size.
    pub fn clear_all_sizes(&mut self) {
        self.element.delete_all(Tag::Size);
    }

    /// Append an additional image.
    pub fn add_additional_image_link(&mut self, link: &str) -> NodeId {
        self.append_value(Tag::AdditionalImageLink, link)
    }

    /// Every additional image.
    #[must_use]
    pub fn additional_image_links(&self) -> Vec<String> {
        self.values(Tag::AdditionalImageLink)
    }

    /// Remove every additional image.
    pub fn clear_all_additional_image_links(&mut self) {
        self.element.delete_all(Tag::AdditionalImageLink);
    }

    fn append_value(&self, tag: Tag, value: &str) -> NodeId {
        let node = self.element.create(tag, Some(value));
        self.element.append_to_model(node);
        node
    }

    fn values(&self, tag: Tag) -> Vec<String> {
        self.element
            .all(tag)
            .into_iter()
            .map(|node| self.element.text(node))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Destinations
    // -----------------------------------------------------------------------

    /// Require the product to be shown in `destination`.
    pub fn add_required_destination(&mut self, destination: &str) -> NodeId {
        self.add_destination(Tag::RequiredDestination, destination)
    }

    /// Exclude the product from `destination`.
    pub fn add_excluded_destination(&mut self, destination: &str) -> NodeId {
        self.add_destination(Tag::ExcludedDestination, destination)
    }

    /// Validate the product against the rules of `destination`.
    pub fn add_validate_destination(&mut self, destination: &str) -> NodeId {
        self.add_destination(Tag::ValidateDestination, destination)
    }

    /// Required destinations in document order.
    #[must_use]
    pub fn required_destinations(&self) -> Vec<String> {
        common::destinations(&self.element, Tag::RequiredDestination)
    }

    /// Excluded destinations in document order.
    #[must_use]
    pub fn excluded_destinations(&self) -> Vec<String> {
        common::destinations(&self.element, Tag::ExcludedDestination)
    }

    /// Validate destinations in document order.
    #[must_use]
    pub fn validate_destinations(&self) -> Vec<String> {
        common::destinations(&self.element, Tag::ValidateDestination)
    }

    /// Remove the whole `app:control` element.
    pub fn clear_all_destinations(&mut self) {
        self.element.delete_all(Tag::Control);
    }

    fn add_destination(&self, tag: Tag, destination: &str) -> NodeId {
        let control = self.element.ensure_first(Tag::Control);
        let node = self.element.create(tag, None);
        self.element.set_attribute(node, "dest", destination);
        self.element.append(control, node);
        node
    }

    // -----------------------------------------------------------------------
    // Generic attributes and groups
    // -----------------------------------------------------------------------

    /// Set the generic attribute `name`, replacing its value, type and unit.
    ///
    /// Only attributes directly under the entry are considered; members of a
    /// group are addressed through [`set_group`](Self::set_group).
    pub fn set_attribute(
        &mut self,
        name: &str,
        value: &str,
        attribute_type: Option<&str>,
        unit: Option<&str>,
    ) -> NodeId {
        let el = &self.element;
        let node = self.find_named(el.model(), Tag::Attribute, name).unwrap_or_else(|| {
            let node = el.create(Tag::Attribute, None);
            el.set_attribute(node, "name", name);
            el.append_to_model(node);
            node
        });
        write_generic(el, node, value, attribute_type, unit);
        node
    }

    /// The generic attribute `name`, if present directly under the entry.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<GenericAttribute> {
        self.find_named(self.element.model(), Tag::Attribute, name)
            .map(|node| read_generic(&self.element, node))
    }

    /// Every generic attribute directly under the entry.
    #[must_use]
    pub fn attributes(&self) -> Vec<GenericAttribute> {
        let el = &self.element;
        el.children_in(el.model(), Tag::Attribute)
            .into_iter()
            .map(|node| read_generic(el, node))
            .collect()
    }

    /// Replace the members of group `name`, creating the group if absent.
    pub fn set_group(&mut self, name: &str, attributes: &[GenericAttribute]) -> NodeId {
        let el = &self.element;
        let group = self.find_named(el.model(), Tag::Group, name).unwrap_or_else(|| {
            let group = el.create(Tag::Group, None);
            el.set_attribute(group, "name", name);
            el.append_to_model(group);
            group
        });
        el.delete_all_in(group, Tag::Attribute);
        for attr in attributes {
            let node = el.create(Tag::Attribute, None);
            el.set_attribute(node, "name", &attr.name);
            write_generic(
                el,
                node,
                &attr.value,
                attr.attribute_type.as_deref(),
                attr.unit.as_deref(),
            );
            el.append(group, node);
        }
        group
    }

    /// The members of group `name`, if the group exists.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<Group> {
        self.find_named(self.element.model(), Tag::Group, name)
            .map(|node| self.read_group(node))
    }

    /// Every group in document order.
    #[must_use]
    pub fn groups(&self) -> Vec<Group> {
        let el = &self.element;
        el.children_in(el.model(), Tag::Group)
            .into_iter()
            .map(|node| self.read_group(node))
            .collect()
    }

    fn read_group(&self, node: NodeId) -> Group {
        let el = &self.element;
        Group {
            name: el.attribute(node, "name"),
            attributes: el
                .children_in(node, Tag::Attribute)
                .into_iter()
                .map(|member| read_generic(el, member))
                .collect(),
        }
    }

    /// Direct child `tag` of `scope` whose `name` attribute is `name`.
    fn find_named(&self, scope: NodeId, tag: Tag, name: &str) -> Option<NodeId> {
        let el = &self.element;
        el.children_in(scope, tag)
            .into_iter()
            .find(|&node| el.attribute(node, "name") == name)
    }
}

fn read_generic(el: &AtomElement, node: NodeId) -> GenericAttribute {
    let optional = |name: &str| {
        el.has_attribute(node, name)
            .then(|| el.attribute(node, name))
    };
    GenericAttribute {
        name: el.attribute(node, "name"),
        value: el.text(node),
        attribute_type: optional("type"),
        unit: optional("unit"),
    }
}

fn write_generic(
    el: &AtomElement,
    node: NodeId,
    value: &str,
    attribute_type: Option<&str>,
    unit: Option<&str>,
) {
    el.set_text(node, value);
    for (name, optional) in [("type", attribute_type), ("unit", unit)] {
        match optional {
            Some(v) => el.set_attribute(node, name, v),
            None => el.remove_attribute(node, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use contentstack_atom::Document;

    use super::*;
    use crate::model::BatchOperation;

    fn shipping(country: &str) -> Shipping {
        Shipping {
            country: country.to_owned(),
            region: "CA".to_owned(),
            price: "5.99".to_owned(),
            price_unit: "usd".to_owned(),
            service: "UPS Ground".to_owned(),
        }
    }

    #[test]
    fn test_should_serialize_dijji_camera() {
        let mut product = Product::create();
        product.set_title("Dijji Digital Camera");
        product.set_price("199.99", "usd");

        let xml = product.to_xml().expect("serializable");
        assert!(xml.contains("<title>Dijji Digital Camera</title>"));
        assert!(xml.contains("<scp:price unit=\"usd\">199.99</scp:price>"));

        let reparsed = Product::from_document(Document::parse(&xml).expect("parsable"));
        assert_eq!(reparsed.title(), "Dijji Digital Camera");
        assert_eq!(reparsed.price(), "199.99");
        assert_eq!(reparsed.price_unit(), "usd");
    }

    #[test]
    fn test_should_declare_product_namespaces() {
        let xml = Product::create().to_xml().expect("serializable");
        assert!(xml.starts_with("<entry xmlns=\"http://www.w3.org/2005/Atom\""));
        for prefix in ["app", "sc", "scp", "batch"] {
            assert!(xml.contains(&format!("xmlns:{prefix}=")), "missing {prefix}");
        }
    }

    #[test]
    fn test_should_read_empty_fields_without_mutating() {
        let product = Product::default();
        let before = product.to_xml().expect("serializable");

        assert_eq!(product.brand(), "");
        assert_eq!(product.price_unit(), "");
        assert_eq!(product.description(), "");
        assert_eq!(product.product_link(), "");
        assert!(product.batch_operation().is_none());
        assert!(product.batch_status().is_none());
        assert!(product.errors_from_batch().is_none());
        assert_eq!(product.to_xml().expect("serializable"), before);
    }

    #[test]
    fn test_should_round_trip_text_fields() {
        let mut product = Product::create();
        product.set_sku("SKU-1");
        product.set_brand("Dijji");
        product.set_google_product_category("Cameras & Optics");
        product.set_condition("new");
        product.set_brand("Dijji Corp");

        let xml = product.to_xml().expect("serializable");
        let reparsed = Product::from_document(Document::parse(&xml).expect("parsable"));
        assert_eq!(reparsed.sku(), "SKU-1");
        assert_eq!(reparsed.brand(), "Dijji Corp");
        assert_eq!(reparsed.google_product_category(), "Cameras & Optics");
        assert_eq!(reparsed.condition(), "new");
        assert_eq!(xml.matches("<scp:brand>").count(), 1);
    }

    #[test]
    fn test_should_keep_shipping_rules_separate() {
        let mut product = Product::create();
        product.add_shipping(&shipping("US"));
        product.add_shipping(&shipping("CA"));

        let rules = product.shippings();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0], shipping("US"));
        assert_eq!(rules[1].country, "CA");
    }

    #[test]
    fn test_should_clear_shippings_without_touching_taxes() {
        let mut product = Product::create();
        product.add_shipping(&shipping("US"));
        product.add_tax(&Tax {
            country: "US".to_owned(),
            region: "CA".to_owned(),
            rate: "8.25".to_owned(),
            ship: "true".to_owned(),
        });

        product.clear_all_shippings();

        assert!(product.shippings().is_empty());
        let taxes = product.taxes();
        assert_eq!(taxes.len(), 1);
        assert_eq!(taxes[0].rate, "8.25");

        product.clear_all_taxes();
        assert!(product.taxes().is_empty());
    }

    #[test]
    fn test_should_manage_repeated_values() {
        let mut product = Product::create();
        product.add_feature("10x zoom");
        product.add_feature("Waterproof");
        product.add_size("S");
        product.add_additional_image_link("http://example.com/1.jpg");

        assert_eq!(product.features(), vec!["10x zoom", "Waterproof"]);
        assert_eq!(product.sizes(), vec!["S"]);

        product.clear_all_features();
        assert!(product.features().is_empty());
        assert_eq!(product.sizes(), vec!["S"]);
        assert_eq!(product.additional_image_links().len(), 1);

        product.clear_all_sizes();
        product.clear_all_additional_image_links();
        assert!(product.sizes().is_empty());
        assert!(product.additional_image_links().is_empty());
    }

    #[test]
    fn test_should_share_one_control_for_destinations() {
        let mut product = Product::create();
        product.add_required_destination("ProductSearch");
        product.add_excluded_destination("ProductAds");
        product.add_validate_destination("CommerceSearch");

        assert_eq!(product.required_destinations(), vec!["ProductSearch"]);
        assert_eq!(product.excluded_destinations(), vec!["ProductAds"]);
        assert_eq!(product.validate_destinations(), vec!["CommerceSearch"]);
        let xml = product.to_xml().expect("serializable");
        assert_eq!(xml.matches("<app:control>").count(), 1);
        assert!(xml.contains("<sc:excluded_destination dest=\"ProductAds\"/>"));

        product.clear_all_destinations();
        assert!(product.required_destinations().is_empty());
        assert!(!product.to_xml().expect("serializable").contains("app:control"));
    }

    #[test]
    fn test_should_set_generic_attribute_by_name() {
        let mut product = Product::create();
        product.set_attribute("megapixels", "12", Some("int"), None);
        product.set_attribute("weight", "1.5", Some("float"), Some("kg"));
        product.set_attribute("megapixels", "16", None, None);

        let attrs = product.attributes();
        assert_eq!(attrs.len(), 2);
        assert_eq!(
            product.attribute("megapixels"),
            Some(GenericAttribute::new("megapixels", "16"))
        );
        let weight = product.attribute("weight").expect("weight set");
        assert_eq!(weight.unit.as_deref(), Some("kg"));
        assert!(product.attribute("missing").is_none());
    }

    #[test]
    fn test_should_replace_group_members() {
        let mut product = Product::create();
        product.set_group(
            "lens",
            &[
                GenericAttribute::new("focal_length", "35mm"),
                GenericAttribute::new("aperture", "f/1.8"),
            ],
        );
        product.set_group("lens", &[GenericAttribute::new("focal_length", "50mm")]);

        let lens = product.group("lens").expect("group set");
        assert_eq!(lens.attributes, vec![GenericAttribute::new("focal_length", "50mm")]);
        assert_eq!(product.groups().len(), 1);
        assert!(product.attribute("focal_length").is_none());
        assert!(product.group("body").is_none());
    }

    #[test]
    fn test_should_list_only_top_level_groups() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom"
                 xmlns:sc="http://schemas.google.com/structuredcontent/2009">
          <sc:group name="lens">
            <sc:attribute name="focal_length">35mm</sc:attribute>
            <sc:group name="coating"><sc:attribute name="layers">7</sc:attribute></sc:group>
          </sc:group>
        </entry>"#;
        let product = Product::from_document(Document::parse(xml).expect("parsable"));

        let groups = product.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "lens");
        assert!(product.group("coating").is_none());
    }

    #[test]
    fn test_should_write_batch_operation_and_id() {
        let mut product = Product::create();
        product.set_batch_operation(BatchOperation::Insert);
        product.set_batch_operation(BatchOperation::Delete);
        product.set_batch_id("42");

        assert_eq!(product.batch_operation(), Some(BatchOperation::Delete));
        assert_eq!(product.batch_id(), "42");
        let xml = product.to_xml().expect("serializable");
        assert!(xml.contains("<batch:operation type=\"delete\"/>"));
        assert_eq!(xml.matches("batch:operation").count(), 1);
    }

    #[test]
    fn test_should_set_units_on_weight_and_sale_price() {
        let mut product = Product::create();
        product.set_shipping_weight("2", "lb");
        product.set_sale_price("149.99", "usd");

        assert_eq!(product.shipping_weight(), "2");
        assert_eq!(product.shipping_weight_unit(), "lb");
        assert_eq!(product.sale_price(), "149.99");
        assert_eq!(product.sale_price_unit(), "usd");
    }

    #[test]
    fn test_should_manage_edit_link() {
        let mut product = Product::create();
        assert_eq!(product.edit_link(), "");

        product.set_edit_link("http://x/edit/1", "application/atom+xml");
        product.set_edit_link("http://x/edit/2", "application/atom+xml");

        assert_eq!(product.edit_link(), "http://x/edit/2");
        assert_eq!(product.element().all(Tag::Link).len(), 1);
    }

    #[test]
    fn test_should_read_batch_response_entry() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom"
       xmlns:batch="http://schemas.google.com/gdata/batch"
       xmlns:sc="http://schemas.google.com/structuredcontent/2009"
       xmlns:app="http://www.w3.org/2007/app">
  <batch:id>7</batch:id>
  <batch:status code="400" reason="Bad Request"/>
  <batch:operation type="insert"/>
  <content type="application/vnd.google.gdata.error+xml">
    <errors xmlns="http://schemas.google.com/g/2005">
      <error><domain>GData</domain><code>required</code></error>
    </errors>
  </content>
  <app:control>
    <sc:warnings>
      <sc:warning>
        <sc:code>validation/missing_recommended</sc:code>
        <sc:domain>ProductSearch</sc:domain>
        <sc:location>brand</sc:location>
        <sc:message>We recommend including this attribute.</sc:message>
      </sc:warning>
    </sc:warnings>
  </app:control>
</entry>"#;
        let product = Product::from_document(Document::parse(xml).expect("parsable"));

        let status = product.batch_status().expect("status present");
        assert_eq!(status.code, "400");
        assert_eq!(status.reason, "Bad Request");
        assert_eq!(product.batch_id(), "7");
        let errors = product.errors_from_batch().expect("errors present");
        assert_eq!(errors.errors()[0].code(), "required");
        let warnings = product.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].location, "brand");
        assert_eq!(product.description(), "");
    }

    #[test]
    fn test_should_read_escaped_batch_errors() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom">
  <content type="application/vnd.google.gdata.error+xml">&lt;errors xmlns="http://schemas.google.com/g/2005"&gt;&lt;error&gt;&lt;code&gt;invalid&lt;/code&gt;&lt;/error&gt;&lt;/errors&gt;</content>
</entry>"#;
        let product = Product::from_document(Document::parse(xml).expect("parsable"));
        let errors = product.errors_from_batch().expect("errors present");
        assert_eq!(errors.errors()[0].code(), "invalid");
    }
}
