pub(crate) mod action_item_controller;
