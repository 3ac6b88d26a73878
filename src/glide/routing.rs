//! Directive to glide-core routing conversion

use glide_redis::cluster_routing::{
    MultipleNodeRoutingInfo, Route as SlotRoute, RoutingInfo, SingleNodeRoutingInfo, SlotAddr,
};
use glide_redis::cluster_topology::get_slot;
use tracing::warn;

use crate::route::{RouteDirective, RouteType, SlotType, SLOT_COUNT};
use crate::utils::{Result, RoutingError};

fn slot_addr(slot_type: SlotType) -> SlotAddr {
    match slot_type {
        SlotType::Primary => SlotAddr::Master,
        SlotType::Replica => SlotAddr::ReplicaRequired,
    }
}

/// Translate a directive into glide-core routing info
///
/// Multi-node routes carry no response policy; glide picks the default
/// aggregation for the command. A payload that does not match the tag is
/// a dispatch error rather than a silent fallback.
pub fn to_routing_info(directive: &RouteDirective) -> Result<RoutingInfo> {
    let route_type = directive.route_type();
    let info = match route_type {
        RouteType::Random => RoutingInfo::SingleNode(SingleNodeRoutingInfo::Random),
        RouteType::AllNodes => RoutingInfo::MultiNode((MultipleNodeRoutingInfo::AllNodes, None)),
        RouteType::AllPrimaries => {
            RoutingInfo::MultiNode((MultipleNodeRoutingInfo::AllMasters, None))
        }
        RouteType::SlotId => {
            let Some((slot_id, slot_type)) = directive.slot_id_info() else {
                return Err(payload_mismatch(directive));
            };
            if slot_id >= SLOT_COUNT {
                warn!("Slot id {} is outside the cluster slot space", slot_id);
            }
            RoutingInfo::SingleNode(SingleNodeRoutingInfo::SpecificNode(SlotRoute::new(
                slot_id,
                slot_addr(slot_type),
            )))
        }
        RouteType::SlotKey => {
            let Some((slot_key, slot_type)) = directive.slot_key_info() else {
                return Err(payload_mismatch(directive));
            };
            RoutingInfo::SingleNode(SingleNodeRoutingInfo::SpecificNode(SlotRoute::new(
                get_slot(slot_key.as_bytes()),
                slot_addr(slot_type),
            )))
        }
        RouteType::ByAddress => {
            let Some((host, port)) = directive.address() else {
                return Err(payload_mismatch(directive));
            };
            RoutingInfo::SingleNode(SingleNodeRoutingInfo::ByAddress {
                host: host.to_string(),
                port,
            })
        }
    };
    Ok(info)
}

fn payload_mismatch(directive: &RouteDirective) -> RoutingError {
    RoutingError::Dispatch(format!(
        "{} directive carries a mismatched payload: {:?}",
        directive.route_type(),
        directive.payload()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{DirectivePayload, Route, ALL_NODES, ALL_PRIMARIES, RANDOM};

    #[test]
    fn test_stateless_routes() {
        assert!(matches!(
            to_routing_info(&RANDOM.to_directive()).unwrap(),
            RoutingInfo::SingleNode(SingleNodeRoutingInfo::Random)
        ));
        assert!(matches!(
            to_routing_info(&ALL_NODES.to_directive()).unwrap(),
            RoutingInfo::MultiNode((MultipleNodeRoutingInfo::AllNodes, None))
        ));
        assert!(matches!(
            to_routing_info(&ALL_PRIMARIES.to_directive()).unwrap(),
            RoutingInfo::MultiNode((MultipleNodeRoutingInfo::AllMasters, None))
        ));
    }

    #[test]
    fn test_slot_routes() {
        let info = to_routing_info(&Route::slot_id(100, SlotType::Replica).to_directive()).unwrap();
        match info {
            RoutingInfo::SingleNode(SingleNodeRoutingInfo::SpecificNode(route)) => {
                assert_eq!(route, SlotRoute::new(100, SlotAddr::ReplicaRequired));
            }
            other => panic!("unexpected routing info: {:?}", other),
        }

        let info = to_routing_info(&Route::slot_key("user:42", SlotType::Primary).to_directive()).unwrap();
        match info {
            RoutingInfo::SingleNode(SingleNodeRoutingInfo::SpecificNode(route)) => {
                assert_eq!(route, SlotRoute::new(get_slot(b"user:42"), SlotAddr::Master));
            }
            other => panic!("unexpected routing info: {:?}", other),
        }
    }

    #[test]
    fn test_address_route() {
        let info = to_routing_info(&Route::by_address("10.0.0.5", 6379).to_directive()).unwrap();
        match info {
            RoutingInfo::SingleNode(SingleNodeRoutingInfo::ByAddress { host, port }) => {
                assert_eq!(host, "10.0.0.5");
                assert_eq!(port, 6379);
            }
            other => panic!("unexpected routing info: {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_payload_is_an_error() {
        let untagged_address = RouteDirective::tag_only(RouteType::ByAddress);
        assert!(matches!(
            to_routing_info(&untagged_address),
            Err(RoutingError::Dispatch(_))
        ));

        let crossed = RouteDirective::with_payload(
            RouteType::SlotId,
            DirectivePayload::Address {
                host: "10.0.0.5".to_string(),
                port: 6379,
            },
        );
        assert!(matches!(to_routing_info(&crossed), Err(RoutingError::Dispatch(_))));
    }
}
