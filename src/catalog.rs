use {
    once_cell::sync::Lazy,
    linked_hash_map::LinkedHashMap,
    crate::{
        variant::AccelVariant,
        layout::VariantLayout,
        error::{UnknownVariant, VariantKey}
    }
};

static CATALOG: Lazy<VariantCatalog> = Lazy::new(VariantCatalog::build);

/// Every variant's layout, keyed by display name in selection order.
#[derive(Debug)]
pub struct VariantCatalog {
    layouts: LinkedHashMap<&'static str, VariantLayout>
}

impl VariantCatalog {
    /// The process-wide catalog.
    pub fn get() -> &'static VariantCatalog {
        &CATALOG
    }

    fn build() -> VariantCatalog {
        let layouts = AccelVariant::ALL
            .iter()
            .map(|&variant| (variant.name(), VariantLayout::new(variant)))
            .collect();

        VariantCatalog { layouts }
    }

    pub fn lookup_by_name(&self, name: &str) -> Result<&VariantLayout, UnknownVariant> {
        self.layouts
            .get(name)
            .ok_or_else(|| UnknownVariant(VariantKey::Name(name.into())))
    }

    pub fn lookup_by_index(&self, index: u32) -> Result<&VariantLayout, UnknownVariant> {
        self.layouts
            .values()
            .find(|layout| layout.index() == index)
            .ok_or(UnknownVariant(VariantKey::Index(index)))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.layouts.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantLayout> {
        self.layouts.values()
    }

    /// Display name to index, for whoever fills in a selector.
    pub fn indices(&self) -> LinkedHashMap<&'static str, u32> {
        self.layouts
            .iter()
            .map(|(&name, layout)| (name, layout.index()))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn total_over_variants() {
        let catalog = VariantCatalog::get();

        for variant in AccelVariant::ALL {
            assert_eq!(catalog.lookup_by_name(variant.name()).unwrap().variant(), variant);
            assert_eq!(catalog.lookup_by_index(variant.index()).unwrap().variant(), variant)
        }
    }

    #[test]
    fn unknown() {
        let catalog = VariantCatalog::get();

        for name in ["", "off", "Motivity", " Linear"] {
            assert_eq!(
                catalog.lookup_by_name(name),
                Err(UnknownVariant(VariantKey::Name(name.into())))
            )
        }

        assert_eq!(
            catalog.lookup_by_index(99),
            Err(UnknownVariant(VariantKey::Index(99)))
        );
        assert!(catalog.lookup_by_index(7).is_err())
    }

    #[test]
    fn selection_order() {
        assert_eq!(
            VariantCatalog::get().names().collect::<Vec<_>>(),
            ["Linear", "Classic", "Natural", "Power", "NaturalGain", "SigmoidGain", "Off"]
        )
    }

    #[test]
    fn indices_serialize_in_order() {
        let yaml = serde_yaml::to_string(&VariantCatalog::get().indices()).unwrap();
        let power = yaml.find("Power: 5").unwrap();
        let natural_gain = yaml.find("NaturalGain: 3").unwrap();

        assert!(power < natural_gain)
    }
}
