use crate::page::{Document, NodeId};
use crate::utils::validation::validate_amount;

/// Donation amount picker: preset buttons plus a custom amount input.
///
/// Selecting a preset writes its amount into the input and claims the active
/// class; typing a custom amount releases every preset. Validation toggles the
/// invalid class instead of erroring, the same soft policy as the listing core.
#[derive(Debug)]
pub struct DonationWidget {
    presets: Vec<NodeId>,
    input: NodeId,
}

impl DonationWidget {
    pub fn build(doc: &mut Document, amounts: &[u32]) -> Self {
        let form = doc.create_element("form");
        let body = doc.body();
        doc.append_child(body, form);

        let presets = amounts
            .iter()
            .map(|amount| {
                let button = doc.create_element("button");
                doc.add_class(button, "donation-preset");
                doc.set_attribute(button, "data-amount", &amount.to_string());
                doc.append_child(form, button);
                button
            })
            .collect();

        let input = doc.create_element("input");
        doc.set_attribute(input, "id", "amount");
        doc.append_child(form, input);

        Self { presets, input }
    }

    pub fn input(&self) -> NodeId {
        self.input
    }

    pub fn presets(&self) -> &[NodeId] {
        &self.presets
    }

    /// Preset click: copy its amount into the input, move the active class.
    pub fn select_preset(&self, doc: &mut Document, preset: NodeId) {
        let amount = doc
            .attribute(preset, "data-amount")
            .unwrap_or_default()
            .to_string();
        doc.set_attribute(self.input, "value", &amount);
        for button in &self.presets {
            doc.remove_class(*button, "active");
        }
        doc.add_class(preset, "active");
    }

    /// Custom amount typed: store it and release every preset.
    pub fn custom_amount(&self, doc: &mut Document, value: &str) {
        doc.set_attribute(self.input, "value", value);
        for button in &self.presets {
            doc.remove_class(*button, "active");
        }
    }

    /// Submit-time check; flags the input rather than failing.
    pub fn validate(&self, doc: &mut Document) -> bool {
        let value = doc.attribute(self.input, "value").unwrap_or("").to_string();
        match validate_amount("amount", &value) {
            Ok(_) => {
                doc.remove_class(self.input, "is-invalid");
                true
            }
            Err(_) => {
                doc.add_class(self.input, "is-invalid");
                false
            }
        }
    }
}
