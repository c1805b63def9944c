//! Parametros de configuracion de la tienda de bebidas

/// Precio base de una bebida chica, en centavos
pub const SMALL_PRICE_CENTS: i64 = 200;

/// Precio base de una bebida mediana, en centavos
pub const MEDIUM_PRICE_CENTS: i64 = 300;

/// Precio base de una bebida grande, en centavos
pub const LARGE_PRICE_CENTS: i64 = 400;

/// Recargo por un shot extra de cafe
pub const EXTRA_SHOT_CENTS: i64 = 50;

/// Recargo por almibar extra en el cafe
pub const EXTRA_SYRUP_CENTS: i64 = 50;

/// Recargo de las bebidas alcoholicas pedidas en fin de semana
pub const WEEKEND_CHARGE_CENTS: i64 = 60;

/// Recargo por agregar proteina a un smoothie
pub const PROTEIN_CENTS: i64 = 150;

/// Precio de cada fruta de un smoothie
pub const FRUIT_CENTS: i64 = 50;

/// Cantidad maxima de bebidas alcoholicas que se pueden pedir
pub const MAX_ALCOHOL_PER_ORDER: u32 = 3;

/// Edad minima para pedir alcohol
pub const MIN_AGE_FOR_ALCOHOL: u32 = 21;

/// Cantidad de frutas a partir de la cual un smoothie se considera lleno.
/// Con 6 frutas ya se alcanzo el maximo.
pub const MAX_FRUIT_COUNT: u32 = 6;

/// Primer horario valido para tomar un pedido
pub const MIN_TIME: u32 = 8;

/// Ultimo horario valido para tomar un pedido
pub const MAX_TIME: u32 = 23;

/// Limite inferior (inclusive) de los numeros de orden
pub const ORDER_NUMBER_MIN: u32 = 10000;

/// Limite superior (exclusive) de los numeros de orden
pub const ORDER_NUMBER_MAX: u32 = 90000;

/// Archivo de pedidos que se lee si no se indica otro por linea de comandos
pub const DEFAULT_ORDERS_FILE: &str = "orders.json";
