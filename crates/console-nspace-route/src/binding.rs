// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hand-off of a composite model to the controller.

use console_nspace_core::{CompositeModel, Datacenter, GrantSet, ModelResource, Nspace};

/// Anything that can receive a resolved route model.
pub trait RouteController {
	/// Replaces the controller state with every field of `model`.
	fn set_properties(&mut self, model: CompositeModel);
}

/// Copies `model` onto `controller` without transformation.
pub fn bind<C: RouteController + ?Sized>(controller: &mut C, model: CompositeModel) {
	controller.set_properties(model);
}

/// Observable controller state for the namespace pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelController {
	pub permissions: GrantSet,
	pub is_loading: bool,
	pub dc: Option<Datacenter>,
	pub create: Option<bool>,
	pub item: Option<Nspace>,
	pub items: Option<Vec<Nspace>>,
	pub filter: Option<String>,
}

impl RouteController for ModelController {
	fn set_properties(&mut self, model: CompositeModel) {
		self.permissions = model.permissions;
		self.is_loading = model.is_loading;
		self.dc = Some(model.dc);
		self.create = model.create;
		self.filter = model.filter;
		match model.resource {
			ModelResource::Item(item) => {
				self.item = Some(item);
				self.items = None;
			}
			ModelResource::Items(items) => {
				self.item = None;
				self.items = Some(items);
			}
		}
	}
}
