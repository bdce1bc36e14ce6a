/// A vendor name, keyed by PCI vendor ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PciVendor {
    pub id: u16,
    pub name: &'static str,
}

/// A device name, keyed by vendor ID and device ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PciDevice {
    pub vendor_id: u16,
    pub device_id: u16,
    pub name: &'static str,
}

pub static VENDORS: &[PciVendor] = &[
    PciVendor { id: 0x1002, name: "Advanced Micro Devices, Inc. [AMD/ATI]" },
    PciVendor { id: 0x1022, name: "Advanced Micro Devices, Inc. [AMD]" },
    PciVendor { id: 0x1033, name: "NEC Corporation" },
    PciVendor { id: 0x104C, name: "Texas Instruments" },
    PciVendor { id: 0x106B, name: "Apple Inc." },
    PciVendor { id: 0x10DE, name: "NVIDIA Corporation" },
    PciVendor { id: 0x10EC, name: "Realtek Semiconductor Co., Ltd." },
    PciVendor { id: 0x1106, name: "VIA Technologies, Inc." },
    PciVendor { id: 0x1180, name: "Ricoh Co Ltd" },
    PciVendor { id: 0x11AB, name: "Marvell Technology Group Ltd." },
    PciVendor { id: 0x1217, name: "O2 Micro, Inc." },
    PciVendor { id: 0x1234, name: "QEMU" },
    PciVendor { id: 0x1414, name: "Microsoft Corporation" },
    PciVendor { id: 0x144D, name: "Samsung Electronics Co Ltd" },
    PciVendor { id: 0x14E4, name: "Broadcom Inc. and subsidiaries" },
    PciVendor { id: 0x15AD, name: "VMware" },
    PciVendor { id: 0x15B3, name: "Mellanox Technologies" },
    PciVendor { id: 0x168C, name: "Qualcomm Atheros" },
    PciVendor { id: 0x1912, name: "Renesas Technology Corp." },
    PciVendor { id: 0x1969, name: "Qualcomm Atheros" },
    PciVendor { id: 0x197B, name: "JMicron Technology Corp." },
    PciVendor { id: 0x1AF4, name: "Red Hat, Inc." },
    PciVendor { id: 0x1B21, name: "ASMedia Technology Inc." },
    PciVendor { id: 0x1B36, name: "Red Hat, Inc." },
    PciVendor { id: 0x1B4B, name: "Marvell Technology Group Ltd." },
    PciVendor { id: 0x1D6B, name: "Linux Foundation" },
    PciVendor { id: 0x5853, name: "XenSource, Inc." },
    PciVendor { id: 0x8086, name: "Intel Corporation" },
    PciVendor { id: 0x80EE, name: "InnoTek Systemberatung GmbH" },
];

pub static DEVICES: &[PciDevice] = &[
    // Intel
    PciDevice { vendor_id: 0x8086, device_id: 0x100E, name: "82540EM Gigabit Ethernet Controller" },
    PciDevice { vendor_id: 0x8086, device_id: 0x100F, name: "82545EM Gigabit Ethernet Controller (Copper)" },
    PciDevice { vendor_id: 0x8086, device_id: 0x10D3, name: "82574L Gigabit Network Connection" },
    PciDevice { vendor_id: 0x8086, device_id: 0x1237, name: "440FX - 82441FX PMC [Natoma]" },
    PciDevice { vendor_id: 0x8086, device_id: 0x1533, name: "I210 Gigabit Network Connection" },
    PciDevice { vendor_id: 0x8086, device_id: 0x153A, name: "Ethernet Connection I217-LM" },
    PciDevice { vendor_id: 0x8086, device_id: 0x1E03, name: "7 Series Chipset Family 6-port SATA Controller [AHCI mode]" },
    PciDevice { vendor_id: 0x8086, device_id: 0x244E, name: "82801 PCI Bridge" },
    PciDevice { vendor_id: 0x8086, device_id: 0x2415, name: "82801AA AC'97 Audio Controller" },
    PciDevice { vendor_id: 0x8086, device_id: 0x2668, name: "82801FB/FBM/FR/FW/FRW (ICH6 Family) High Definition Audio Controller" },
    PciDevice { vendor_id: 0x8086, device_id: 0x2918, name: "82801IB (ICH9) LPC Interface Controller" },
    PciDevice { vendor_id: 0x8086, device_id: 0x2922, name: "82801IR/IO/IH (ICH9R/DO/DH) 6 port SATA Controller [AHCI mode]" },
    PciDevice { vendor_id: 0x8086, device_id: 0x2930, name: "82801I (ICH9 Family) SMBus Controller" },
    PciDevice { vendor_id: 0x8086, device_id: 0x29C0, name: "82G33/G31/P35/P31 Express DRAM Controller" },
    PciDevice { vendor_id: 0x8086, device_id: 0x7000, name: "82371SB PIIX3 ISA [Natoma/Triton II]" },
    PciDevice { vendor_id: 0x8086, device_id: 0x7010, name: "82371SB PIIX3 IDE [Natoma/Triton II]" },
    PciDevice { vendor_id: 0x8086, device_id: 0x7020, name: "82371SB PIIX3 USB [Natoma/Triton II]" },
    PciDevice { vendor_id: 0x8086, device_id: 0x7113, name: "82371AB/EB/MB PIIX4 ACPI" },
    // AMD
    PciDevice { vendor_id: 0x1022, device_id: 0x1480, name: "Starship/Matisse Root Complex" },
    PciDevice { vendor_id: 0x1022, device_id: 0x1483, name: "Starship/Matisse GPP Bridge" },
    PciDevice { vendor_id: 0x1022, device_id: 0x2000, name: "79c970 [PCnet32 LANCE]" },
    // Realtek
    PciDevice { vendor_id: 0x10EC, device_id: 0x8139, name: "RTL-8100/8101L/8139 PCI Fast Ethernet Adapter" },
    PciDevice { vendor_id: 0x10EC, device_id: 0x8168, name: "RTL8111/8168/8411 PCI Express Gigabit Ethernet Controller" },
    // QEMU and paravirtual devices
    PciDevice { vendor_id: 0x1234, device_id: 0x1111, name: "QEMU Standard VGA" },
    PciDevice { vendor_id: 0x1AF4, device_id: 0x1000, name: "Virtio network device" },
    PciDevice { vendor_id: 0x1AF4, device_id: 0x1001, name: "Virtio block device" },
    PciDevice { vendor_id: 0x1AF4, device_id: 0x1002, name: "Virtio memory balloon" },
    PciDevice { vendor_id: 0x1AF4, device_id: 0x1003, name: "Virtio console" },
    PciDevice { vendor_id: 0x1AF4, device_id: 0x1041, name: "Virtio 1.0 network device" },
    PciDevice { vendor_id: 0x1AF4, device_id: 0x1042, name: "Virtio 1.0 block device" },
    PciDevice { vendor_id: 0x1AF4, device_id: 0x1050, name: "Virtio 1.0 GPU" },
    PciDevice { vendor_id: 0x1B36, device_id: 0x000D, name: "QEMU XHCI Host Controller" },
    PciDevice { vendor_id: 0x15AD, device_id: 0x0405, name: "SVGA II Adapter" },
    PciDevice { vendor_id: 0x15AD, device_id: 0x07A0, name: "PCI Express Root Port" },
    PciDevice { vendor_id: 0x80EE, device_id: 0xBEEF, name: "VirtualBox Graphics Adapter" },
    PciDevice { vendor_id: 0x80EE, device_id: 0xCAFE, name: "VirtualBox Guest Service" },
    // Storage and USB controllers
    PciDevice { vendor_id: 0x144D, device_id: 0xA808, name: "NVMe SSD Controller SM981/PM981/PM983" },
    PciDevice { vendor_id: 0x1B21, device_id: 0x0612, name: "ASM1062 Serial ATA Controller" },
    PciDevice { vendor_id: 0x197B, device_id: 0x2363, name: "JMB363 SATA/IDE Controller" },
    PciDevice { vendor_id: 0x1033, device_id: 0x0194, name: "uPD720200 USB 3.0 Host Controller" },
];
