use crate::secret::Secret;

/// Declarative metadata for one secret field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Fail the pass when the field has no identifier.
    pub required: bool,
    /// Never resolve the field.
    pub ignored: bool,
    /// Comma separated allow-list of bag keys the field may see.
    pub secret_keys: Option<String>,
}

impl FieldOptions {
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    pub fn secret_keys(mut self, keys: impl Into<String>) -> Self {
        self.secret_keys = Some(keys.into());
        self
    }
}

/// One registered secret field of a configuration struct.
pub struct SecretField<'a> {
    pub name: &'static str,
    pub secret: &'a mut dyn Secret,
    pub options: FieldOptions,
}

/// Secret fields of a configuration struct, in declaration order.
#[derive(Default)]
pub struct Fields<'a> {
    fields: Vec<SecretField<'a>>,
}

impl<'a> Fields<'a> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn secret(self, name: &'static str, secret: &'a mut dyn Secret) -> Self {
        self.secret_with(name, secret, FieldOptions::default())
    }

    pub fn secret_with(
        mut self,
        name: &'static str,
        secret: &'a mut dyn Secret,
        options: FieldOptions,
    ) -> Self {
        self.fields.push(SecretField {
            name,
            secret,
            options,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for Fields<'a> {
    type Item = SecretField<'a>;
    type IntoIter = std::vec::IntoIter<SecretField<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// A configuration struct whose secret fields can be resolved.
///
/// Only fields registered in [`Fields`] are considered; everything else on the
/// struct is left untouched.
///
/// ```
/// use envsecret_core::{Configuration, FieldOptions, Fields, LoginSecret, StringSecret};
///
/// struct Config {
///     region: String,
///     api_token: StringSecret,
///     database: LoginSecret,
/// }
///
/// impl Configuration for Config {
///     fn secret_fields(&mut self) -> Option<Fields<'_>> {
///         Some(
///             Fields::new()
///                 .secret_with("api_token", &mut self.api_token, FieldOptions::default().required())
///                 .secret("database", &mut self.database),
///         )
///     }
/// }
/// ```
pub trait Configuration {
    /// Register the struct's secret fields. `None` when there is no struct to
    /// resolve, e.g. an absent `Option`.
    fn secret_fields(&mut self) -> Option<Fields<'_>>;
}

impl<C: Configuration + ?Sized> Configuration for &mut C {
    fn secret_fields(&mut self) -> Option<Fields<'_>> {
        (**self).secret_fields()
    }
}

impl<C: Configuration + ?Sized> Configuration for Box<C> {
    fn secret_fields(&mut self) -> Option<Fields<'_>> {
        (**self).secret_fields()
    }
}

impl<C: Configuration> Configuration for Option<C> {
    fn secret_fields(&mut self) -> Option<Fields<'_>> {
        self.as_mut().and_then(|c| c.secret_fields())
    }
}
