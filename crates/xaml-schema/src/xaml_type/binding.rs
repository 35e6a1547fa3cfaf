// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Lazy binding of handler markers to static host methods.
//!
//! A missing marker means "no handler". A marker naming a method the host
//! type does not declare (as a static method with the handler's shape) is a
//! configuration error, reported the first time the handler is requested.

use super::XamlType;
use crate::error::{Result, SchemaError};
use crate::handler::{SetMarkupExtensionHandler, SetTypeConverterHandler};
use crate::host::{HostTypeDescriptor, Marker, MarkerKind, MethodBody, MethodSignature};

const MARKUP_EXTENSION_HANDLER: &str = "XamlSetMarkupExtensionHandler";
const TYPE_CONVERTER_HANDLER: &str = "XamlSetTypeConverterHandler";

pub fn set_markup_extension_handler(ty: &XamlType) -> Result<Option<SetMarkupExtensionHandler>> {
    let Some(host) = ty.underlying_type() else {
        return Ok(None);
    };
    let method = match host.marker(MarkerKind::SetMarkupExtensionHandler) {
        Some(Marker::SetMarkupExtensionHandler { method }) => method.clone(),
        _ => return Ok(None),
    };

    let bound = host
        .static_method(&method, MethodSignature::SetMarkupExtensionHandler)
        .and_then(|info| match &info.body {
            MethodBody::SetMarkupExtension(body) => Some(body.clone()),
            _ => None,
        });
    match bound {
        Some(body) => {
            log::debug!(
                "[binding::set_markup_extension_handler] bound {}::{}",
                host,
                method
            );
            Ok(Some(SetMarkupExtensionHandler::new(method, body)))
        }
        None => {
            log::warn!(
                "[binding::set_markup_extension_handler] {} declares missing handler '{}'",
                host,
                method
            );
            Err(SchemaError::HandlerBinding {
                handler: MARKUP_EXTENSION_HANDLER,
                type_name: host.full_name(),
                method,
            })
        }
    }
}

pub fn set_type_converter_handler(ty: &XamlType) -> Result<Option<SetTypeConverterHandler>> {
    let Some(host) = ty.underlying_type() else {
        return Ok(None);
    };
    let method = match host.marker(MarkerKind::SetTypeConverterHandler) {
        Some(Marker::SetTypeConverterHandler { method }) => method.clone(),
        _ => return Ok(None),
    };

    let bound = host
        .static_method(&method, MethodSignature::SetTypeConverterHandler)
        .and_then(|info| match &info.body {
            MethodBody::SetTypeConverter(body) => Some(body.clone()),
            _ => None,
        });
    match bound {
        Some(body) => {
            log::debug!(
                "[binding::set_type_converter_handler] bound {}::{}",
                host,
                method
            );
            Ok(Some(SetTypeConverterHandler::new(method, body)))
        }
        None => {
            log::warn!(
                "[binding::set_type_converter_handler] {} declares missing handler '{}'",
                host,
                method
            );
            Err(SchemaError::HandlerBinding {
                handler: TYPE_CONVERTER_HANDLER,
                type_name: host.full_name(),
                method,
            })
        }
    }
}
