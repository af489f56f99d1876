use std::borrow::Cow;

use crate::allow_list::AllowList;
use crate::cache::{Lookup, RetrievalCache};
use crate::config::{Configuration, SecretField};
use crate::error::ResolveError;
use crate::secret::KeyOverride;
use crate::store::Store;

/// Call [`process`] and panic on any error.
pub fn must_process<C, S>(config: &mut C, store: &S)
where
    C: Configuration + ?Sized,
    S: Store + ?Sized,
{
    if let Err(err) = process(config, store) {
        panic!("resolving secrets: {err}");
    }
}

/// Populate the secret fields of `config` from `store`.
///
/// Fields are resolved in registration order and the first failure stops the
/// pass; fields resolved before it keep their values. Each distinct identifier
/// is fetched from the store at most once per call.
pub fn process<C, S>(config: &mut C, store: &S) -> Result<(), ResolveError>
where
    C: Configuration + ?Sized,
    S: Store + ?Sized,
{
    let fields = config
        .secret_fields()
        .ok_or(ResolveError::RequiresStructReference)?;

    let mut cache = RetrievalCache::new(store);
    for field in fields {
        resolve_field(field, &mut cache)?;
    }

    tracing::debug!(fetched = cache.len(), "secret resolution finished");
    Ok(())
}

fn resolve_field<S>(
    field: SecretField<'_>,
    cache: &mut RetrievalCache<'_, S>,
) -> Result<(), ResolveError>
where
    S: Store + ?Sized,
{
    let SecretField {
        name,
        secret,
        options,
    } = field;

    if options.ignored {
        tracing::trace!(field = name, "skipping ignored secret field");
        return Ok(());
    }

    let id = secret.id().to_string();
    if id.is_empty() {
        if options.required {
            return Err(ResolveError::MissingIdentifier { field: name });
        }
        tracing::trace!(field = name, "skipping optional secret field without identifier");
        return Ok(());
    }

    let allow_list = options.secret_keys.as_deref().and_then(AllowList::parse);
    let overrides = allow_list.as_ref().map_or(0, AllowList::len);
    match secret.key_override() {
        KeyOverride::AtMostOne if overrides > 1 => {
            return Err(ResolveError::TooManyOverrideKeys {
                field: name,
                count: overrides,
            });
        }
        KeyOverride::Forbidden if overrides > 0 => {
            return Err(ResolveError::OverrideNotAllowed { field: name });
        }
        _ => {}
    }

    let (bag, lookup) = cache
        .get(&id)
        .map_err(|source| ResolveError::RetrievalFailed {
            field: name,
            id: id.clone(),
            source,
        })?;
    let cached = lookup == Lookup::Hit;
    tracing::debug!(field = name, id = %id, cached, "resolving secret field");

    let visible = match &allow_list {
        Some(list) => {
            for key in list.missing(&bag) {
                tracing::warn!(field = name, id = %id, key, "allowed key not present in secret");
            }
            Cow::Owned(list.filter(&bag))
        }
        None => Cow::Borrowed(bag.as_ref()),
    };

    secret
        .decode(&visible)
        .map_err(|source| ResolveError::Decode { field: name, source })
}
