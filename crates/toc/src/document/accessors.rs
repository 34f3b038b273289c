//! Typed accessors for registered directives.

use toc_semantics::{ElementKind, TextLocale};

use crate::conditions::Condition;
use crate::document::{TocError, TocFile};
use crate::types::{ListValue, LocalizedValue, Value};

impl TocFile {
    /// A localized directive's value, with every locale branch.
    pub fn localized(&self, name: &str) -> Option<&LocalizedValue> {
        self.attribute(name)?.as_localized()
    }

    /// One locale branch of a localized directive.
    pub fn translation(&self, name: &str, locale: TextLocale) -> Option<&str> {
        self.localized(name)?.get(locale)
    }

    pub fn list(&self, name: &str) -> Option<&ListValue> {
        self.attribute(name)?.as_list()
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.attribute(name)?.as_bool()
    }

    pub fn condition(&self, name: &str) -> Option<&Condition> {
        self.attribute(name)?.as_condition()
    }

    /// Every interface version the addon declares.
    pub fn interface_versions(&self) -> Vec<i64> {
        self.interface()
            .map(|list| list.iter().filter_map(|item| item.as_integer()).collect())
            .unwrap_or_default()
    }

    /// Replace the `Interface` list.
    pub fn set_interface(&mut self, versions: &[i64]) -> Result<bool, TocError> {
        let items = versions.iter().map(i64::to_string);
        let list = ListValue::from_items(ElementKind::Integer, items).map_err(|source| {
            TocError::Value {
                directive: "Interface".to_string(),
                source,
            }
        })?;
        self.set_attribute("Interface", Value::List(list))
    }
}

/// Default-locale getter and setter per localized directive.
macro_rules! localized_accessors {
    ($($getter:ident, $setter:ident => $name:literal;)*) => {
        impl TocFile {
            $(
                #[doc = concat!("The default-locale `", $name, "`.")]
                pub fn $getter(&self) -> Option<&str> {
                    self.localized($name)?.default_text()
                }

                #[doc = concat!("Set the default-locale `", $name, "`.")]
                pub fn $setter(&mut self, text: &str) -> Result<bool, TocError> {
                    self.set_translation($name, TextLocale::DEFAULT, text)
                }
            )*
        }
    };
}

macro_rules! list_accessors {
    ($($getter:ident => $name:literal;)*) => {
        impl TocFile {
            $(
                #[doc = concat!("The merged `", $name, "` list.")]
                pub fn $getter(&self) -> Option<&ListValue> {
                    self.list($name)
                }
            )*
        }
    };
}

macro_rules! bool_accessors {
    ($($getter:ident, $setter:ident => $name:literal;)*) => {
        impl TocFile {
            $(
                pub fn $getter(&self) -> Option<bool> {
                    self.boolean($name)
                }

                pub fn $setter(&mut self, value: bool) -> Result<bool, TocError> {
                    self.set_attribute($name, Value::from(value))
                }
            )*
        }
    };
}

macro_rules! condition_accessors {
    ($($getter:ident => $name:literal;)*) => {
        impl TocFile {
            $(
                pub fn $getter(&self) -> Option<&Condition> {
                    self.condition($name)
                }
            )*
        }
    };
}

localized_accessors! {
    title, set_title => "Title";
    author, set_author => "Author";
    version, set_version => "Version";
    notes, set_notes => "Notes";
    group, set_group => "Group";
    category, set_category => "Category";
    icon_texture, set_icon_texture => "IconTexture";
    icon_atlas, set_icon_atlas => "IconAtlas";
    addon_compartment_func, set_addon_compartment_func => "AddonCompartmentFunc";
    addon_compartment_func_on_enter, set_addon_compartment_func_on_enter => "AddonCompartmentFuncOnEnter";
    addon_compartment_func_on_leave, set_addon_compartment_func_on_leave => "AddonCompartmentFuncOnLeave";
}

list_accessors! {
    interface => "Interface";
    saved_variables => "SavedVariables";
    saved_variables_per_character => "SavedVariablesPerCharacter";
    saved_variables_machine => "SavedVariablesMachine";
    load_with_addons => "LoadWith";
    load_managers => "LoadManagers";
    dependencies => "Dependencies";
    optional_deps => "OptionalDeps";
}

bool_accessors! {
    load_on_demand, set_load_on_demand => "LoadOnDemand";
    load_first, set_load_first => "LoadFirst";
    default_state, set_default_state => "DefaultState";
    only_beta_and_ptr, set_only_beta_and_ptr => "OnlyBetaAndPTR";
    load_saved_variables_first, set_load_saved_variables_first => "LoadSavedVariablesFirst";
    use_secure_environment, set_use_secure_environment => "UseSecureEnvironment";
}

condition_accessors! {
    allow_load => "AllowLoad";
    allow_load_game_type => "AllowLoadGameType";
    allow_load_text_locale => "AllowLoadTextLocale";
}
