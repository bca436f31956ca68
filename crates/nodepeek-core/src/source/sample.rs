//! Sample payloads served in simulation mode.

pub const SAMPLE_START_SCRIPT: &str = r#"#!/bin/bash
# Cardano node startup script
export CARDANO_NODE_SOCKET_PATH="/node/socket/node.socket"
export NODE_HOME="/node"
export PATH="${NODE_HOME}/bin:${PATH}"

# Start cardano-node with mainnet configuration
cardano-node run   --topology ${NODE_HOME}/config/mainnet-topology.json   --database-path ${NODE_HOME}/db   --socket-path ${CARDANO_NODE_SOCKET_PATH}   --host-addr 0.0.0.0   --port 3001   --config ${NODE_HOME}/config/mainnet-config.json
"#;

/// Compact JSON, as `cardano-cli query tip` output arrives over the wire.
pub const SAMPLE_NODE_TIP: &str = r#"{"block":10234567,"epoch":478,"era":"Babbage","hash":"6f1c2b9a0e8d4b7c3a5f9e2d1c0b8a7f6e5d4c3b2a1f0e9d8c7b6a5f4e3d2c1b","slot":118340012,"slotInEpoch":312412,"slotsToEpochEnd":119588,"syncProgress":"100.00"}"#;
