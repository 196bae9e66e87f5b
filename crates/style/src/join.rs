//! Attribute-wise fill of unset slots.
//!
//! `join_from` copies a donor's value into every slot the target leaves unset
//! and never touches a slot the target already holds. Joining twice from the
//! same donor therefore changes nothing the second time.

use crate::layout::LayoutStyle;
use crate::text::TextStyle;

pub trait Join {
    /// Fills the unset slots of `self` from `donor`.
    fn join_from(&mut self, donor: &Self);
}

macro_rules! fill_unset {
    ($target:ident, $donor:ident; $($slot:ident),+ $(,)?) => {
        $(
            if $target.$slot.is_none() {
                $target.$slot = $donor.$slot.clone();
            }
        )+
    };
}

impl Join for TextStyle {
    fn join_from(&mut self, donor: &Self) {
        fill_unset!(self, donor;
            font_family,
            font_size,
            bold,
            italic,
            underline,
            color,
            number_format,
            locale,
        );
    }
}

impl Join for LayoutStyle {
    fn join_from(&mut self, donor: &Self) {
        fill_unset!(self, donor;
            border_top,
            border_left,
            border_right,
            border_bottom,
            fill_pattern,
            background,
            foreground,
            horizontal_align,
            vertical_align,
            auto_size,
            shrink_to_fit,
            width,
            height,
            rotation,
            scale,
        );
    }
}
