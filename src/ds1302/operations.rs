use crate::pins::Pins;

use super::transaction::Transaction;

/// Byte-level transfers, available on any pin controller. Write command
/// bytes are even, read command bytes are odd; passing the wrong kind is a
/// programming error, not a device condition.
pub trait BusOperations: Pins {
	fn single_write(&mut self, address: u8, data: u8) -> crate::AResult<()> {
		assert_eq!(0, address & 1, "write command bytes are even");
		let mut tx = Transaction::begin(self)?;
		tx.emit_byte(address)?;
		tx.emit_byte(data)?;
		Ok(())
	}

	fn single_read(&mut self, address: u8) -> crate::AResult<u8> {
		assert_eq!(1, address & 1, "read command bytes are odd");
		let mut tx = Transaction::begin(self)?;
		tx.emit_byte(address)?;
		let mut tx = tx.start_receive()?;
		tx.receive_byte()
	}

	/// Receive `count` bytes at ascending offsets from `address` in one CE
	/// window, without re-issuing the command in between.
	fn burst_read(&mut self, address: u8, count: usize) -> crate::AResult<Vec<u8>> {
		assert_eq!(1, address & 1, "read command bytes are odd");
		let mut tx = Transaction::begin(self)?;
		tx.emit_byte(address)?;
		let mut tx = tx.start_receive()?;
		let mut result = Vec::with_capacity(count);
		for _ in 0..count {
			result.push(tx.receive_byte()?);
		}
		Ok(result)
	}

	fn burst_write(&mut self, address: u8, data: &[u8]) -> crate::AResult<()> {
		assert_eq!(0, address & 1, "write command bytes are even");
		let mut tx = Transaction::begin(self)?;
		tx.emit_byte(address)?;
		for byte in data {
			tx.emit_byte(*byte)?;
		}
		Ok(())
	}
}

impl<P: Pins + ?Sized> BusOperations for P {
}
