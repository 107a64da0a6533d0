// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

const QUICK_TIPS: &[&str] = &[
    "Store apples separately from bananas to prevent them from ripening too quickly.",
    "Carrots should be stored in a perforated plastic bag in the refrigerator to stay crisp.",
    "Store chicken in the coldest part of the refrigerator and cook it within 1-2 days of purchase.",
    "Keep milk on the middle shelf of the refrigerator to maintain a consistent temperature.",
    "Potatoes should be stored in a cool, dark place to prevent sprouting.",
];

const DEFAULT_STORAGE_TIP: &str =
    "Keep in a cool, dry place or refrigerator depending on the item.";

/// Storage advice for a food, by name.
pub fn storage_tip(name: &str) -> &'static str {
    match name.trim().to_lowercase().as_str() {
        "apple" => {
            "Store apples separately from bananas to prevent over-ripening. Keep them in a cool place."
        }
        "chicken" => "Keep chicken in the coldest part of your fridge and use within 1-2 days of purchase.",
        "milk" => "Store milk on the middle shelf to maintain a consistent temperature.",
        "carrot" => "Keep carrots in a perforated plastic bag in the fridge to retain moisture.",
        "banana" => "Bananas can be stored at room temperature until they reach desired ripeness.",
        _ => DEFAULT_STORAGE_TIP,
    }
}

/// A rotating list of general food storage tips.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuickTips {
    index: usize,
}

impl QuickTips {
    /// Starts at the tip for `seed`, e.g. the day of year, wrapping around the list.
    pub fn starting_at(seed: usize) -> Self {
        Self {
            index: seed % QUICK_TIPS.len(),
        }
    }

    /// The tip currently shown.
    pub fn current(&self) -> &'static str {
        QUICK_TIPS[self.index]
    }

    /// Moves to the next tip, wrapping around, and returns it.
    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % QUICK_TIPS.len();
        self.current()
    }

    /// Number of distinct tips.
    pub fn len(&self) -> usize {
        QUICK_TIPS.len()
    }

    /// Always false, there is at least one tip.
    pub fn is_empty(&self) -> bool {
        QUICK_TIPS.is_empty()
    }
}
